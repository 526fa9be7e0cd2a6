use std::{collections::BTreeSet, sync::Arc};

use log::{debug, error, warn};

use crate::{
    Exercise, Name, NameError, Notification, Notifier, ProfileID, ReadError, SetUpdate,
    TemplateID, Workout, WorkoutExercise, WorkoutExerciseID, WorkoutSetID, WorkoutSummary,
    WorkoutTemplate, WriteError,
};

/// Per-profile persistence of a workout session.
pub trait SessionRepository {
    fn read_current_workout(&self, profile_id: ProfileID) -> Result<Option<Workout>, ReadError>;
    /// Writing `None` removes the stored workout.
    fn write_current_workout(
        &self,
        profile_id: ProfileID,
        workout: Option<&Workout>,
    ) -> Result<(), WriteError>;
    fn read_elapsed(&self, profile_id: ProfileID) -> Result<u64, ReadError>;
    fn write_elapsed(&self, profile_id: ProfileID, seconds: u64) -> Result<(), WriteError>;
    fn read_history(&self, profile_id: ProfileID) -> Result<Vec<Workout>, ReadError>;
    fn write_history(&self, profile_id: ProfileID, history: &[Workout]) -> Result<(), WriteError>;
    fn read_templates(&self, profile_id: ProfileID) -> Result<Vec<WorkoutTemplate>, ReadError>;
    fn write_templates(
        &self,
        profile_id: ProfileID,
        templates: &[WorkoutTemplate],
    ) -> Result<(), WriteError>;
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("a workout is already in progress")]
    WorkoutInProgress,
    #[error("no workout in progress")]
    NoActiveWorkout,
    #[error(transparent)]
    Validation(#[from] NameError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoActiveWorkout,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Collection {
    CurrentWorkout,
    Elapsed,
    History,
    Templates,
}

impl Collection {
    fn name(self) -> &'static str {
        match self {
            Collection::CurrentWorkout => "current workout",
            Collection::Elapsed => "workout timer",
            Collection::History => "workout history",
            Collection::Templates => "templates",
        }
    }

    fn error_title(self) -> &'static str {
        match self {
            Collection::CurrentWorkout | Collection::Elapsed => "Error Saving Workout",
            Collection::History => "Error Saving Workout History",
            Collection::Templates => "Error Saving Template",
        }
    }
}

/// Workout session of one profile.
///
/// The store owns the in-progress workout, its elapsed time, the workout history and the
/// templates. Every mutation is written through to the repository. A failed write keeps the
/// in-memory state and is retried by the next write of the same collection or by
/// [`WorkoutSessionStore::flush`].
///
/// A collection that could not be loaded is never written, so the stored data is not replaced by
/// the incomplete in-memory state. Writes of such a collection first try to load it again and
/// merge it into memory.
///
/// Collections are shared as [`Arc`] snapshots and replaced copy-on-write, so a snapshot handed
/// out earlier is never modified.
pub struct WorkoutSessionStore<R, N> {
    repository: R,
    notifier: N,
    profile_id: ProfileID,
    current: Option<Arc<Workout>>,
    elapsed: u64,
    history: Arc<Vec<Workout>>,
    templates: Arc<Vec<WorkoutTemplate>>,
    pending: BTreeSet<Collection>,
    unreadable: BTreeSet<Collection>,
}

impl<R: SessionRepository, N: Notifier> WorkoutSessionStore<R, N> {
    pub fn new(repository: R, notifier: N, profile_id: ProfileID) -> Self {
        let mut store = Self {
            repository,
            notifier,
            profile_id,
            current: None,
            elapsed: 0,
            history: Arc::new(Vec::new()),
            templates: Arc::new(Vec::new()),
            pending: BTreeSet::new(),
            unreadable: BTreeSet::new(),
        };
        store.load();
        store
    }

    #[must_use]
    pub fn profile_id(&self) -> ProfileID {
        self.profile_id
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::InProgress
        } else {
            SessionState::NoActiveWorkout
        }
    }

    #[must_use]
    pub fn current_workout(&self) -> Option<Arc<Workout>> {
        self.current.clone()
    }

    /// Seconds since the current workout was started.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Completed workouts, newest first.
    #[must_use]
    pub fn history(&self) -> Arc<Vec<Workout>> {
        self.history.clone()
    }

    /// Templates, newest first.
    #[must_use]
    pub fn templates(&self) -> Arc<Vec<WorkoutTemplate>> {
        self.templates.clone()
    }

    #[must_use]
    pub fn has_pending_writes(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn start_workout(&mut self, name: &str) -> Result<Arc<Workout>, SessionError> {
        self.ensure_no_workout()?;
        let workout = Workout::new(Name::new(name)?);
        Ok(self.begin(workout))
    }

    pub fn start_workout_from_template(
        &mut self,
        template: &WorkoutTemplate,
    ) -> Result<Arc<Workout>, SessionError> {
        self.ensure_no_workout()?;
        let workout = Workout {
            exercises: template.workout_exercises(),
            ..Workout::new(template.name.clone())
        };
        Ok(self.begin(workout))
    }

    /// Append an exercise with a single empty set to the current workout.
    pub fn add_exercise(&mut self, exercise: Exercise) -> Result<WorkoutExerciseID, SessionError> {
        self.modify_current(|workout| {
            let workout_exercise = WorkoutExercise::new(exercise);
            let id = workout_exercise.id;
            workout.exercises.push(workout_exercise);
            Some(id)
        })
        .ok_or(SessionError::NoActiveWorkout)
    }

    /// Append a set pre-filled with the values of the last set of the exercise.
    pub fn add_set(&mut self, exercise_id: WorkoutExerciseID) -> Option<WorkoutSetID> {
        self.modify_current(|workout| {
            let exercise = workout.exercise_mut(exercise_id)?;
            let set = exercise.carry_forward_set();
            let id = set.id;
            exercise.sets.push(set);
            Some(id)
        })
    }

    /// Merge the given fields into a set.
    ///
    /// Returns `true` if the set has been marked as completed by this update.
    pub fn update_set(
        &mut self,
        exercise_id: WorkoutExerciseID,
        set_id: WorkoutSetID,
        update: &SetUpdate,
    ) -> bool {
        self.modify_current(|workout| {
            let set = workout
                .exercise_mut(exercise_id)?
                .sets
                .iter_mut()
                .find(|s| s.id == set_id)?;
            Some(set.apply(update))
        })
        .unwrap_or(false)
    }

    /// Remove a set. The last remaining set of an exercise is kept.
    pub fn delete_set(&mut self, exercise_id: WorkoutExerciseID, set_id: WorkoutSetID) -> bool {
        self.modify_current(|workout| {
            let exercise = workout.exercise_mut(exercise_id)?;
            let index = exercise.sets.iter().position(|s| s.id == set_id)?;
            if exercise.sets.len() == 1 {
                warn!("refused to delete last set of {}", exercise.exercise.name);
                return None;
            }
            exercise.sets.remove(index);
            Some(())
        })
        .is_some()
    }

    pub fn delete_exercise(&mut self, exercise_id: WorkoutExerciseID) -> bool {
        self.modify_current(|workout| {
            let index = workout.exercises.iter().position(|e| e.id == exercise_id)?;
            workout.exercises.remove(index);
            Some(())
        })
        .is_some()
    }

    /// Finish the current workout and move it to the history.
    pub fn complete_workout(&mut self) -> Option<Workout> {
        let mut workout = Arc::unwrap_or_clone(self.current.take()?);
        let duration = self.elapsed * 1000;
        workout.completed = true;
        workout.duration = Some(duration);
        workout.summary = Some(WorkoutSummary::calculate(&workout, duration));
        Arc::make_mut(&mut self.history).insert(0, workout.clone());
        self.elapsed = 0;

        let saved = self.persist(Collection::History);
        self.persist(Collection::CurrentWorkout);
        self.persist(Collection::Elapsed);
        if saved {
            self.notifier.notify(Notification::info(
                "Workout Completed!",
                "Your workout has been saved successfully.",
            ));
        }
        debug!("completed workout {}", workout.id);

        Some(workout)
    }

    /// Discard the current workout. The history is not affected.
    pub fn cancel_workout(&mut self) -> bool {
        let Some(workout) = self.current.take() else {
            return false;
        };
        self.elapsed = 0;
        self.persist(Collection::CurrentWorkout);
        self.persist(Collection::Elapsed);
        debug!("cancelled workout {}", workout.id);
        true
    }

    pub fn save_as_template(&mut self, workout: &Workout) -> WorkoutTemplate {
        let template = WorkoutTemplate::from_workout(workout);
        Arc::make_mut(&mut self.templates).insert(0, template.clone());
        if self.persist(Collection::Templates) {
            self.notifier.notify(Notification::info(
                "Template Created!",
                format!("\"{}\" has been saved to your templates.", template.name),
            ));
        }
        debug!("created template {}", template.id);
        template
    }

    pub fn delete_template(&mut self, id: TemplateID) -> bool {
        let Some(index) = self.templates.iter().position(|t| t.id == id) else {
            return false;
        };
        Arc::make_mut(&mut self.templates).remove(index);
        if self.persist(Collection::Templates) {
            self.notifier.notify(Notification::info(
                "Template Deleted",
                "The template has been removed from your library.",
            ));
        }
        true
    }

    /// Replace the template with the same id.
    pub fn update_template(&mut self, template: WorkoutTemplate) -> bool {
        let Some(index) = self.templates.iter().position(|t| t.id == template.id) else {
            return false;
        };
        Arc::make_mut(&mut self.templates)[index] = template;
        if self.persist(Collection::Templates) {
            self.notifier.notify(Notification::info(
                "Template Updated",
                "The template has been updated successfully.",
            ));
        }
        true
    }

    /// Advance the elapsed time of the current workout by one second.
    pub fn tick(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.elapsed += 1;
        self.persist(Collection::Elapsed);
        true
    }

    /// Replace the whole session by the session of another profile.
    ///
    /// Writes still pending for the previous profile are retried once before switching.
    pub fn switch_profile(&mut self, profile_id: ProfileID) {
        if !self.flush() {
            warn!(
                "discarding unsaved changes of profile {}: {:?}",
                self.profile_id, self.pending
            );
        }
        self.profile_id = profile_id;
        self.load();
        debug!("switched to profile {profile_id}");
    }

    /// Retry all failed writes. Returns `true` if nothing is left to be written.
    pub fn flush(&mut self) -> bool {
        for collection in self.pending.clone() {
            self.persist(collection);
        }
        self.pending.is_empty()
    }

    fn ensure_no_workout(&self) -> Result<(), SessionError> {
        if let Some(workout) = &self.current {
            warn!("refused to start workout while {} is in progress", workout.id);
            return Err(SessionError::WorkoutInProgress);
        }
        Ok(())
    }

    fn begin(&mut self, workout: Workout) -> Arc<Workout> {
        let workout = Arc::new(workout);
        debug!("started workout {}", workout.id);
        self.current = Some(workout.clone());
        self.elapsed = 0;
        self.persist(Collection::CurrentWorkout);
        self.persist(Collection::Elapsed);
        workout
    }

    fn modify_current<T>(&mut self, f: impl FnOnce(&mut Workout) -> Option<T>) -> Option<T> {
        let result = f(Arc::make_mut(self.current.as_mut()?))?;
        self.persist(Collection::CurrentWorkout);
        Some(result)
    }

    fn load(&mut self) {
        let profile_id = self.profile_id;
        self.pending.clear();
        self.unreadable.clear();
        self.current = self
            .read(
                self.repository.read_current_workout(profile_id),
                Collection::CurrentWorkout,
            )
            .map(Arc::new);
        self.elapsed = if self.current.is_some() {
            self.read(self.repository.read_elapsed(profile_id), Collection::Elapsed)
        } else {
            0
        };
        self.history = Arc::new(self.read(
            self.repository.read_history(profile_id),
            Collection::History,
        ));
        self.templates = Arc::new(self.read(
            self.repository.read_templates(profile_id),
            Collection::Templates,
        ));
    }

    fn read<T: Default>(&mut self, result: Result<T, ReadError>, collection: Collection) -> T {
        result.unwrap_or_else(|err| {
            error!("failed to read {}: {err}", collection.name());
            self.unreadable.insert(collection);
            self.notifier.notify(Notification::error(
                "Error Loading Workouts",
                format!("Could not load your {}.", collection.name()),
            ));
            T::default()
        })
    }

    /// Load a collection that failed to load before and merge the stored entries into memory.
    fn reload(&mut self, collection: Collection) -> Result<(), ReadError> {
        let profile_id = self.profile_id;
        match collection {
            Collection::CurrentWorkout => {
                self.repository.read_current_workout(profile_id)?;
            }
            Collection::Elapsed => {
                self.repository.read_elapsed(profile_id)?;
            }
            Collection::History => {
                let stored = self.repository.read_history(profile_id)?;
                merge(Arc::make_mut(&mut self.history), stored, |w| w.id);
            }
            Collection::Templates => {
                let stored = self.repository.read_templates(profile_id)?;
                merge(Arc::make_mut(&mut self.templates), stored, |t| t.id);
            }
        }
        self.unreadable.remove(&collection);
        debug!("reloaded {}", collection.name());
        Ok(())
    }

    fn persist(&mut self, collection: Collection) -> bool {
        if self.unreadable.contains(&collection) {
            if let Err(err) = self.reload(collection) {
                if self.pending.insert(collection) {
                    error!(
                        "refused to overwrite unreadable {}: {err}",
                        collection.name()
                    );
                    self.notifier.notify(Notification::error(
                        collection.error_title(),
                        "Your stored data could not be read. Your changes are kept but not saved.",
                    ));
                } else {
                    debug!("{} is still unreadable: {err}", collection.name());
                }
                return false;
            }
        }
        let profile_id = self.profile_id;
        let result = match collection {
            Collection::CurrentWorkout => self
                .repository
                .write_current_workout(profile_id, self.current.as_deref()),
            Collection::Elapsed => self.repository.write_elapsed(profile_id, self.elapsed),
            Collection::History => self.repository.write_history(profile_id, &self.history),
            Collection::Templates => self.repository.write_templates(profile_id, &self.templates),
        };
        match result {
            Ok(()) => {
                self.pending.remove(&collection);
                true
            }
            Err(err) => {
                if self.pending.insert(collection) {
                    error!("failed to write {}: {err}", collection.name());
                    self.notifier.notify(Notification::error(
                        collection.error_title(),
                        "Your changes are kept and will be saved again.",
                    ));
                } else {
                    debug!("failed to write {} again: {err}", collection.name());
                }
                false
            }
        }
    }
}

/// Append the stored entries whose ids are not in memory.
fn merge<T, K: PartialEq>(current: &mut Vec<T>, stored: Vec<T>, id: impl Fn(&T) -> K) {
    let missing = stored
        .into_iter()
        .filter(|s| !current.iter().any(|c| id(c) == id(s)))
        .collect::<Vec<_>>();
    current.extend(missing);
}

/// Format seconds as "H:MM:SS" or, below one hour, as "M:SS".
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
