use chrono::{DateTime, Utc};

use crate::{
    Exercise, ExerciseID, Name, SetValues, Workout, WorkoutExercise, WorkoutID, WorkoutSet,
    id::uuid_id,
};

uuid_id!(TemplateID);

/// Number of sets used for exercises added in the template editor.
pub const DEFAULT_TARGET_SETS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutTemplate {
    pub id: TemplateID,
    pub name: Name,
    pub created_from: Option<WorkoutID>,
    pub created_at: DateTime<Utc>,
    pub exercises: Vec<TemplateExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub exercise_id: ExerciseID,
    pub exercise: Exercise,
    pub target_sets: u32,
    pub last_used_values: Option<SetValues>,
}

impl WorkoutTemplate {
    /// Derive a template from a workout.
    ///
    /// The values of the last completed set of each exercise, or of its last set if none was
    /// completed, are kept for pre-filling.
    #[must_use]
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            id: TemplateID::new(),
            name: workout.name.with_suffix("Template"),
            created_from: Some(workout.id),
            created_at: Utc::now(),
            exercises: workout
                .exercises
                .iter()
                .map(|e| TemplateExercise {
                    exercise_id: e.exercise_id,
                    exercise: e.exercise.clone(),
                    target_sets: u32::try_from(e.sets.len()).unwrap_or(u32::MAX),
                    last_used_values: e
                        .completed_sets()
                        .last()
                        .or(e.sets.last())
                        .map(|s| s.values),
                })
                .collect(),
        }
    }

    /// Exercises with pre-filled, incomplete sets for a new workout.
    #[must_use]
    pub fn workout_exercises(&self) -> Vec<WorkoutExercise> {
        self.exercises
            .iter()
            .map(|e| {
                let values = e
                    .last_used_values
                    .unwrap_or(SetValues::zero(e.exercise.category));
                WorkoutExercise::with_sets(
                    e.exercise.clone(),
                    (0..e.target_sets).map(|_| WorkoutSet::new(values)).collect(),
                )
            })
            .collect()
    }

    #[must_use]
    pub fn renamed(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_exercise(&self, exercise: Exercise) -> Self {
        let mut template = self.clone();
        template.exercises.push(TemplateExercise {
            exercise_id: exercise.id,
            exercise,
            target_sets: DEFAULT_TARGET_SETS,
            last_used_values: None,
        });
        template
    }

    #[must_use]
    pub fn without_exercise(&self, index: usize) -> Self {
        let mut template = self.clone();
        if index < template.exercises.len() {
            template.exercises.remove(index);
        }
        template
    }

    /// Change the number of sets of an exercise. At least one set is kept.
    #[must_use]
    pub fn with_target_sets(&self, index: usize, target_sets: u32) -> Self {
        let mut template = self.clone();
        if let Some(exercise) = template.exercises.get_mut(index) {
            exercise.target_sets = target_sets.max(1);
        }
        template
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.target_sets).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        Category, Reps, Weight,
        tests::data::{exercise, strength_set},
    };

    use super::*;

    fn workout() -> Workout {
        Workout {
            exercises: vec![
                WorkoutExercise::with_sets(
                    exercise("Bench Press", Category::Chest),
                    vec![
                        strength_set(10, 135.0, true),
                        strength_set(8, 145.0, true),
                        strength_set(6, 155.0, false),
                    ],
                ),
                WorkoutExercise::with_sets(
                    exercise("Squat", Category::Legs),
                    vec![strength_set(5, 225.0, false)],
                ),
            ],
            ..Workout::new(Name::new("Push").unwrap())
        }
    }

    #[test]
    fn test_from_workout() {
        let workout = workout();
        let template = WorkoutTemplate::from_workout(&workout);
        assert_eq!(template.name, Name::new("Push Template").unwrap());
        assert_eq!(template.created_from, Some(workout.id));
        assert_eq!(
            template
                .exercises
                .iter()
                .map(|e| e.target_sets)
                .collect::<Vec<_>>(),
            vec![3, 1]
        );
        assert_eq!(
            template.exercises[0].last_used_values,
            Some(SetValues::Strength {
                reps: Reps::new(8).unwrap(),
                weight: Weight::new(145.0).unwrap(),
            })
        );
        assert_eq!(
            template.exercises[1].last_used_values,
            Some(SetValues::Strength {
                reps: Reps::new(5).unwrap(),
                weight: Weight::new(225.0).unwrap(),
            })
        );
    }

    #[test]
    fn test_from_workout_with_long_name() {
        let workout = Workout::new(Name::new(&"A".repeat(60)).unwrap());
        assert_eq!(WorkoutTemplate::from_workout(&workout).name, workout.name);
    }

    #[test]
    fn test_workout_exercises() {
        let template = WorkoutTemplate::from_workout(&workout()).with_exercise(exercise(
            "Rowing",
            Category::Cardio,
        ));
        let exercises = template.workout_exercises();
        assert_eq!(
            exercises.iter().map(|e| e.sets.len()).collect::<Vec<_>>(),
            vec![3, 1, 3]
        );
        assert!(exercises.iter().flat_map(|e| &e.sets).all(|s| !s.completed));
        assert!(
            exercises[0]
                .sets
                .iter()
                .all(|s| s.values == template.exercises[0].last_used_values.unwrap())
        );
        assert_eq!(
            exercises[2].sets[0].values,
            SetValues::zero(Category::Cardio)
        );
    }

    #[rstest]
    #[case(0, 5, vec![5, 1])]
    #[case(1, 0, vec![3, 1])]
    #[case(2, 4, vec![3, 1])]
    fn test_with_target_sets(
        #[case] index: usize,
        #[case] target_sets: u32,
        #[case] expected: Vec<u32>,
    ) {
        let template = WorkoutTemplate::from_workout(&workout()).with_target_sets(index, target_sets);
        assert_eq!(
            template
                .exercises
                .iter()
                .map(|e| e.target_sets)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_editing() {
        let template = WorkoutTemplate::from_workout(&workout());
        let edited = template
            .renamed(Name::new("Chest").unwrap())
            .without_exercise(1)
            .without_exercise(5);
        assert_eq!(edited.id, template.id);
        assert_eq!(edited.name, Name::new("Chest").unwrap());
        assert_eq!(edited.exercises.len(), 1);
        assert_eq!(edited.num_sets(), 3);
        assert_eq!(template.exercises.len(), 2);
    }
}
