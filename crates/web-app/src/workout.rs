use std::{
    cell::{Ref, RefCell},
    rc::{Rc, Weak},
    sync::Arc,
};

use ironlog_domain as domain;
use log::debug;

use crate::scheduler::{Scheduler, Ticker};

const TICK_INTERVAL_MS: u32 = 1000;

/// Active workout screen: the session of the selected profile together with the rest timer.
///
/// The elapsed counter ticks while a workout is in progress and the rest timer ticks while it
/// is running. Completing a set starts the rest timer with the profile's default rest time.
pub struct WorkoutController<R, N, S> {
    state: Rc<RefCell<State<R, N>>>,
    scheduler: S,
}

struct State<R, N> {
    session: domain::WorkoutSessionStore<R, N>,
    rest_timer: domain::RestTimer,
    settings: domain::Settings,
    notifier: N,
    elapsed_ticker: Option<Ticker>,
    rest_ticker: Option<Ticker>,
}

impl<R, N, S> WorkoutController<R, N, S>
where
    R: domain::SessionRepository + 'static,
    N: domain::Notifier + Clone + 'static,
    S: Scheduler,
{
    pub fn new(repository: R, notifier: N, scheduler: S, profile: &domain::UserProfile) -> Self {
        let controller = Self {
            state: Rc::new(RefCell::new(State {
                session: domain::WorkoutSessionStore::new(repository, notifier.clone(), profile.id),
                rest_timer: domain::RestTimer::new(),
                settings: profile.settings,
                notifier,
                elapsed_ticker: None,
                rest_ticker: None,
            })),
            scheduler,
        };
        controller.sync_elapsed_ticker();
        controller
    }

    pub fn session(&self) -> Ref<'_, domain::WorkoutSessionStore<R, N>> {
        Ref::map(self.state.borrow(), |state| &state.session)
    }

    pub fn rest_timer(&self) -> domain::RestTimer {
        self.state.borrow().rest_timer
    }

    pub fn settings(&self) -> domain::Settings {
        self.state.borrow().settings
    }

    pub fn update_settings(&self, settings: domain::Settings) {
        self.state.borrow_mut().settings = settings;
    }

    pub fn start_workout(&self, name: &str) -> Result<Arc<domain::Workout>, domain::SessionError> {
        let workout = self.state.borrow_mut().session.start_workout(name)?;
        self.sync_elapsed_ticker();
        Ok(workout)
    }

    pub fn start_workout_from_template(
        &self,
        template: &domain::WorkoutTemplate,
    ) -> Result<Arc<domain::Workout>, domain::SessionError> {
        let workout = self
            .state
            .borrow_mut()
            .session
            .start_workout_from_template(template)?;
        self.sync_elapsed_ticker();
        Ok(workout)
    }

    pub fn add_exercise(
        &self,
        exercise: domain::Exercise,
    ) -> Result<domain::WorkoutExerciseID, domain::SessionError> {
        self.state.borrow_mut().session.add_exercise(exercise)
    }

    pub fn add_set(&self, exercise_id: domain::WorkoutExerciseID) -> Option<domain::WorkoutSetID> {
        self.state.borrow_mut().session.add_set(exercise_id)
    }

    /// Update a set and start the rest timer if the set has just been completed.
    pub fn update_set(
        &self,
        exercise_id: domain::WorkoutExerciseID,
        set_id: domain::WorkoutSetID,
        update: &domain::SetUpdate,
    ) -> bool {
        let completed = {
            let mut state = self.state.borrow_mut();
            state.session.update_set(exercise_id, set_id, update)
        };
        if completed {
            let duration = self.state.borrow().settings.default_rest_time;
            self.start_rest_timer(Some(duration));
        }
        completed
    }

    pub fn delete_set(
        &self,
        exercise_id: domain::WorkoutExerciseID,
        set_id: domain::WorkoutSetID,
    ) -> bool {
        self.state.borrow_mut().session.delete_set(exercise_id, set_id)
    }

    pub fn delete_exercise(&self, exercise_id: domain::WorkoutExerciseID) -> bool {
        self.state.borrow_mut().session.delete_exercise(exercise_id)
    }

    pub fn complete_workout(&self) -> Option<domain::Workout> {
        let workout = self.state.borrow_mut().session.complete_workout();
        self.stop_rest_timer();
        self.sync_elapsed_ticker();
        workout
    }

    pub fn cancel_workout(&self) -> bool {
        let cancelled = self.state.borrow_mut().session.cancel_workout();
        self.stop_rest_timer();
        self.sync_elapsed_ticker();
        cancelled
    }

    pub fn save_as_template(&self, workout: &domain::Workout) -> domain::WorkoutTemplate {
        self.state.borrow_mut().session.save_as_template(workout)
    }

    pub fn update_template(&self, template: domain::WorkoutTemplate) -> bool {
        self.state.borrow_mut().session.update_template(template)
    }

    pub fn delete_template(&self, id: domain::TemplateID) -> bool {
        self.state.borrow_mut().session.delete_template(id)
    }

    pub fn start_rest_timer(&self, duration: Option<u32>) {
        self.state.borrow_mut().rest_timer.start(duration);
        self.sync_rest_ticker();
    }

    pub fn pause_rest_timer(&self) {
        self.state.borrow_mut().rest_timer.pause();
        self.sync_rest_ticker();
    }

    pub fn resume_rest_timer(&self) {
        self.state.borrow_mut().rest_timer.resume();
        self.sync_rest_ticker();
    }

    pub fn reset_rest_timer(&self, duration: Option<u32>) {
        self.state.borrow_mut().rest_timer.reset(duration);
        self.sync_rest_ticker();
    }

    pub fn stop_rest_timer(&self) {
        self.state.borrow_mut().rest_timer.stop();
        self.sync_rest_ticker();
    }

    pub fn show_rest_timer(&self) {
        self.state.borrow_mut().rest_timer.show();
    }

    pub fn hide_rest_timer(&self) {
        self.state.borrow_mut().rest_timer.hide();
    }

    /// Load the session of another profile and use its settings.
    pub fn switch_profile(&self, profile: &domain::UserProfile) {
        {
            let mut state = self.state.borrow_mut();
            state.session.switch_profile(profile.id);
            state.settings = profile.settings;
        }
        self.stop_rest_timer();
        self.sync_elapsed_ticker();
    }

    /// Retry all failed writes. Returns `true` if nothing is left to be written.
    pub fn flush(&self) -> bool {
        self.state.borrow_mut().session.flush()
    }

    fn sync_elapsed_ticker(&self) {
        let in_progress =
            self.state.borrow().session.state() == domain::SessionState::InProgress;
        let running = self.state.borrow().elapsed_ticker.is_some();
        if in_progress && !running {
            let ticker = self.every(|state| {
                state.session.tick();
            });
            self.state.borrow_mut().elapsed_ticker = Some(ticker);
            debug!("elapsed counter started");
        } else if !in_progress && running {
            self.state.borrow_mut().elapsed_ticker = None;
            debug!("elapsed counter stopped");
        }
    }

    fn sync_rest_ticker(&self) {
        let is_running = self.state.borrow().rest_timer.is_running();
        let running = self.state.borrow().rest_ticker.is_some();
        if is_running && !running {
            let ticker = self.every(|state| {
                if state.rest_timer.tick() == Some(domain::RestTimerEvent::Completed) {
                    state.notifier.notify(domain::Notification::info(
                        "Rest Timer Complete!",
                        "Time to get back to your workout!",
                    ));
                    state.rest_ticker = None;
                }
            });
            self.state.borrow_mut().rest_ticker = Some(ticker);
        } else if !is_running && running {
            self.state.borrow_mut().rest_ticker = None;
        }
    }

    fn every(&self, mut f: impl FnMut(&mut State<R, N>) + 'static) -> Ticker {
        let state: Weak<RefCell<State<R, N>>> = Rc::downgrade(&self.state);
        self.scheduler.every(
            TICK_INTERVAL_MS,
            Box::new(move || {
                if let Some(state) = state.upgrade() {
                    f(&mut state.borrow_mut());
                }
            }),
        )
    }
}
