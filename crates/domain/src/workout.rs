use chrono::{DateTime, Utc};
use derive_more::{Display, Into};

use crate::{Category, Exercise, ExerciseID, Name, id::uuid_id};

uuid_id!(WorkoutID);
uuid_id!(WorkoutExerciseID);
uuid_id!(WorkoutSetID);

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub date: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
    pub completed: bool,
    /// Milliseconds
    pub duration: Option<u64>,
    pub summary: Option<WorkoutSummary>,
}

impl Workout {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            id: WorkoutID::new(),
            name,
            date: Utc::now(),
            exercises: Vec::new(),
            completed: false,
            duration: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn exercise(&self, id: WorkoutExerciseID) -> Option<&WorkoutExercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercise_mut(&mut self, id: WorkoutExerciseID) -> Option<&mut WorkoutExercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub id: WorkoutExerciseID,
    pub exercise_id: ExerciseID,
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    /// Create an exercise entry with a single empty set.
    #[must_use]
    pub fn new(exercise: Exercise) -> Self {
        let set = WorkoutSet::new(SetValues::zero(exercise.category));
        Self::with_sets(exercise, vec![set])
    }

    #[must_use]
    pub fn with_sets(exercise: Exercise, sets: Vec<WorkoutSet>) -> Self {
        Self {
            id: WorkoutExerciseID::new(),
            exercise_id: exercise.id,
            exercise,
            sets,
        }
    }

    /// A new incomplete set pre-filled with the values of the last set.
    #[must_use]
    pub fn carry_forward_set(&self) -> WorkoutSet {
        WorkoutSet::new(
            self.sets
                .last()
                .map_or(SetValues::zero(self.exercise.category), |s| s.values),
        )
    }

    pub fn completed_sets(&self) -> impl Iterator<Item = &WorkoutSet> {
        self.sets.iter().filter(|s| s.completed)
    }

    #[must_use]
    pub fn set(&self, id: WorkoutSetID) -> Option<&WorkoutSet> {
        self.sets.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: WorkoutSetID,
    pub values: SetValues,
    pub completed: bool,
}

impl WorkoutSet {
    #[must_use]
    pub fn new(values: SetValues) -> Self {
        Self {
            id: WorkoutSetID::new(),
            values,
            completed: false,
        }
    }

    /// Merge the given fields into the set.
    ///
    /// Fields which do not apply to the kind of set are ignored. Returns `true` if the set
    /// changed from incomplete to completed.
    pub fn apply(&mut self, update: &SetUpdate) -> bool {
        match &mut self.values {
            SetValues::Strength { reps, weight } => {
                if let Some(r) = update.reps {
                    *reps = r;
                }
                if let Some(w) = update.weight {
                    *weight = w;
                }
            }
            SetValues::Cardio { duration, distance } => {
                if let Some(t) = update.duration {
                    *duration = t;
                }
                if let Some(d) = update.distance {
                    *distance = d;
                }
            }
        }
        let was_completed = self.completed;
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        !was_completed && self.completed
    }
}

/// Values of a set, depending on the category of the exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetValues {
    Strength { reps: Reps, weight: Weight },
    Cardio { duration: Seconds, distance: Distance },
}

impl SetValues {
    #[must_use]
    pub fn zero(category: Category) -> Self {
        if category == Category::Cardio {
            SetValues::Cardio {
                duration: Seconds::default(),
                distance: Distance::default(),
            }
        } else {
            SetValues::Strength {
                reps: Reps::default(),
                weight: Weight::default(),
            }
        }
    }

    #[must_use]
    pub fn reps(&self) -> u32 {
        match self {
            SetValues::Strength { reps, .. } => u32::from(*reps),
            SetValues::Cardio { .. } => 0,
        }
    }

    /// Weight times reps in pounds.
    #[must_use]
    pub fn volume(&self) -> f64 {
        match self {
            SetValues::Strength { reps, weight } => {
                f64::from(*weight) * f64::from(u32::from(*reps))
            }
            SetValues::Cardio { .. } => 0.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetUpdate {
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub duration: Option<Seconds>,
    pub distance: Option<Distance>,
    pub completed: Option<bool>,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Weight in pounds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !(0.0..10000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0 to 9999.9")]
    OutOfRange,
    #[error("Weight must be a decimal number")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seconds(u32);

impl From<u32> for Seconds {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Distance in meters.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub fn new(value: f64) -> Result<Self, DistanceError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DistanceError::Negative);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DistanceError {
    #[error("Distance must be zero or positive")]
    Negative,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WorkoutSummary {
    pub total_sets: u32,
    pub total_reps: u32,
    /// Sum of weight times reps in pounds
    pub total_weight: f64,
    pub exercises_completed: u32,
    /// Milliseconds
    pub duration: u64,
}

impl WorkoutSummary {
    /// Aggregate the completed sets of a workout.
    ///
    /// Incomplete sets never contribute, regardless of their values.
    #[must_use]
    pub fn calculate(workout: &Workout, duration: u64) -> Self {
        let mut summary = WorkoutSummary {
            duration,
            ..WorkoutSummary::default()
        };

        for exercise in &workout.exercises {
            let mut completed = 0;
            for set in exercise.completed_sets() {
                completed += 1;
                summary.total_reps += set.values.reps();
                summary.total_weight += set.values.volume();
            }
            summary.total_sets += completed;
            if completed > 0 {
                summary.exercises_completed += 1;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::tests::data::{exercise, strength_set};

    use super::*;

    fn workout(exercises: Vec<WorkoutExercise>) -> Workout {
        Workout {
            exercises,
            ..Workout::new(Name::new("A").unwrap())
        }
    }

    #[test]
    fn test_summary_without_completed_sets() {
        let workout = workout(vec![WorkoutExercise::with_sets(
            exercise("Squat", Category::Legs),
            vec![strength_set(5, 225.0, false), strength_set(5, 225.0, false)],
        )]);
        assert_eq!(
            WorkoutSummary::calculate(&workout, 60_000),
            WorkoutSummary {
                total_sets: 0,
                total_reps: 0,
                total_weight: 0.0,
                exercises_completed: 0,
                duration: 60_000,
            }
        );
    }

    #[test]
    fn test_summary_counts_completed_sets_only() {
        let workout = workout(vec![WorkoutExercise::with_sets(
            exercise("Bench Press", Category::Chest),
            vec![strength_set(10, 100.0, true), strength_set(8, 100.0, false)],
        )]);
        let summary = WorkoutSummary::calculate(&workout, 0);
        assert_eq!(summary.total_reps, 10);
        assert_approx_eq!(summary.total_weight, 1000.0);
        assert_eq!(summary.total_sets, 1);
        assert_eq!(summary.exercises_completed, 1);
    }

    #[test]
    fn test_summary_multiple_exercises() {
        let mut rowing = WorkoutExercise::new(exercise("Rowing", Category::Cardio));
        rowing.sets[0].apply(&SetUpdate {
            duration: Some(Seconds::from(600)),
            distance: Some(Distance::new(2000.0).unwrap()),
            completed: Some(true),
            ..SetUpdate::default()
        });
        let workout = workout(vec![
            WorkoutExercise::with_sets(
                exercise("Squat", Category::Legs),
                vec![strength_set(5, 200.0, true), strength_set(3, 220.0, true)],
            ),
            WorkoutExercise::with_sets(
                exercise("Curls", Category::Arms),
                vec![strength_set(12, 30.0, false)],
            ),
            rowing,
        ]);
        let summary = WorkoutSummary::calculate(&workout, 1000);
        assert_eq!(summary.total_sets, 3);
        assert_eq!(summary.total_reps, 8);
        assert_approx_eq!(summary.total_weight, 1660.0);
        assert_eq!(summary.exercises_completed, 2);
        assert_eq!(summary, WorkoutSummary::calculate(&workout, 1000));
    }

    #[test]
    fn test_workout_exercise_new() {
        let strength = WorkoutExercise::new(exercise("Squat", Category::Legs));
        assert_eq!(strength.sets.len(), 1);
        assert_eq!(strength.sets[0].values, SetValues::zero(Category::Legs));
        assert!(!strength.sets[0].completed);

        let cardio = WorkoutExercise::new(exercise("Running", Category::Cardio));
        assert!(matches!(cardio.sets[0].values, SetValues::Cardio { .. }));
    }

    #[test]
    fn test_carry_forward_set() {
        let exercise = WorkoutExercise::with_sets(
            exercise("Bench Press", Category::Chest),
            vec![strength_set(5, 135.0, true)],
        );
        let set = exercise.carry_forward_set();
        assert_eq!(set.values, exercise.sets[0].values);
        assert!(!set.completed);
        assert_ne!(set.id, exercise.sets[0].id);
    }

    #[rstest]
    #[case::complete(false, Some(true), true)]
    #[case::already_completed(true, Some(true), false)]
    #[case::uncomplete(true, Some(false), false)]
    #[case::unchanged(false, None, false)]
    fn test_set_apply_completion(
        #[case] completed: bool,
        #[case] update: Option<bool>,
        #[case] newly_completed: bool,
    ) {
        let mut set = strength_set(5, 100.0, completed);
        assert_eq!(
            set.apply(&SetUpdate {
                completed: update,
                ..SetUpdate::default()
            }),
            newly_completed
        );
    }

    #[test]
    fn test_set_apply_ignores_unrelated_fields() {
        let mut set = strength_set(5, 100.0, false);
        set.apply(&SetUpdate {
            reps: Some(Reps::new(8).unwrap()),
            distance: Some(Distance::new(100.0).unwrap()),
            ..SetUpdate::default()
        });
        assert_eq!(
            set.values,
            SetValues::Strength {
                reps: Reps::new(8).unwrap(),
                weight: Weight::new(100.0).unwrap(),
            }
        );
    }

    #[rstest]
    #[case("10", Ok(Reps(10)))]
    #[case(" 0 ", Ok(Reps(0)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("-1", Err(RepsError::ParseError))]
    #[case("1.5", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("135", Ok(Weight(135.0)))]
    #[case("42,5", Ok(Weight(42.5)))]
    #[case("-5", Err(WeightError::OutOfRange))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Distance(0.0)))]
    #[case(5000.0, Ok(Distance(5000.0)))]
    #[case(-1.0, Err(DistanceError::Negative))]
    #[case(f64::NAN, Err(DistanceError::Negative))]
    fn test_distance_new(#[case] value: f64, #[case] expected: Result<Distance, DistanceError>) {
        assert_eq!(Distance::new(value), expected);
    }
}
