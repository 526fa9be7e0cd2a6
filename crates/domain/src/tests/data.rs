use chrono::{DateTime, Duration, Utc};

use crate::{
    Category, Distance, Equipment, Exercise, ExerciseID, MuscleGroup, Name, Reps, Seconds,
    SetValues, Weight, Workout, WorkoutExercise, WorkoutSet, WorkoutSummary,
};

pub fn exercise(name: &str, category: Category) -> Exercise {
    Exercise {
        id: ExerciseID::new(),
        name: Name::new(name).unwrap(),
        category,
        equipment: vec![Equipment::Barbell],
        muscle_groups: vec![MuscleGroup::Chest],
        instructions: None,
    }
}

pub fn strength_set(reps: u32, weight: f64, completed: bool) -> WorkoutSet {
    WorkoutSet {
        completed,
        ..WorkoutSet::new(SetValues::Strength {
            reps: Reps::new(reps).unwrap(),
            weight: Weight::new(weight).unwrap(),
        })
    }
}

pub fn cardio_set(duration: u32, distance: f64, completed: bool) -> WorkoutSet {
    WorkoutSet {
        completed,
        ..WorkoutSet::new(SetValues::Cardio {
            duration: Seconds::from(duration),
            distance: Distance::new(distance).unwrap(),
        })
    }
}

/// A completed workout as it is stored in the history.
pub fn completed_workout(
    date: DateTime<Utc>,
    duration_minutes: i64,
    exercises: Vec<WorkoutExercise>,
) -> Workout {
    let duration = u64::try_from(Duration::minutes(duration_minutes).num_milliseconds()).unwrap();
    let mut workout = Workout {
        date,
        exercises,
        completed: true,
        duration: Some(duration),
        ..Workout::new(Name::new("Workout").unwrap())
    };
    workout.summary = Some(WorkoutSummary::calculate(&workout, duration));
    workout
}
