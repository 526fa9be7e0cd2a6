//! Serialized representation of domain types.
//!
//! Enums are stored by name, quantities in their canonical units (pounds, inches, seconds,
//! meters). Converting back into domain types validates all values again.

use chrono::{DateTime, Utc};
use ironlog_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! stored_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl From<domain::$name> for $name {
            fn from(value: domain::$name) -> Self {
                match value {
                    $(domain::$name::$variant => $name::$variant),+
                }
            }
        }

        impl From<$name> for domain::$name {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => domain::$name::$variant),+
                }
            }
        }
    };
}

stored_enum!(Category {
    Chest,
    Back,
    Shoulders,
    Legs,
    Arms,
    Core,
    Cardio,
});

stored_enum!(Equipment {
    Barbell,
    Dumbbell,
    Bodyweight,
    Machine,
    Cable,
});

stored_enum!(MuscleGroup {
    Chest,
    Triceps,
    Shoulders,
    Back,
    Biceps,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    Core,
});

stored_enum!(MeasurementKind {
    Weight,
    BodyFat,
    MuscleMass,
    Chest,
    Bicep,
    Waist,
    Thigh,
    Neck,
    Forearm,
});

stored_enum!(Theme {
    System,
    Light,
    Dark,
});

stored_enum!(WeightUnit { Lbs, Kg });

stored_enum!(MeasurementUnit { Imperial, Metric });

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DataError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
    #[error(transparent)]
    InvalidWeight(#[from] domain::WeightError),
    #[error(transparent)]
    InvalidDistance(#[from] domain::DistanceError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub equipment: Vec<Equipment>,
    pub muscle_groups: Vec<MuscleGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            category: value.category.into(),
            equipment: value.equipment.iter().copied().map(Equipment::from).collect(),
            muscle_groups: value
                .muscle_groups
                .iter()
                .copied()
                .map(MuscleGroup::from)
                .collect(),
            instructions: value.instructions.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = DataError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: value.category.into(),
            equipment: value.equipment.into_iter().map(From::from).collect(),
            muscle_groups: value.muscle_groups.into_iter().map(From::from).collect(),
            instructions: value.instructions,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SetValues {
    Strength { reps: u32, weight: f64 },
    Cardio { duration: u32, distance: f64 },
}

impl From<domain::SetValues> for SetValues {
    fn from(value: domain::SetValues) -> Self {
        match value {
            domain::SetValues::Strength { reps, weight } => SetValues::Strength {
                reps: reps.into(),
                weight: weight.into(),
            },
            domain::SetValues::Cardio { duration, distance } => SetValues::Cardio {
                duration: duration.into(),
                distance: distance.into(),
            },
        }
    }
}

impl TryFrom<SetValues> for domain::SetValues {
    type Error = DataError;

    fn try_from(value: SetValues) -> Result<Self, Self::Error> {
        Ok(match value {
            SetValues::Strength { reps, weight } => domain::SetValues::Strength {
                reps: domain::Reps::new(reps)?,
                weight: domain::Weight::new(weight)?,
            },
            SetValues::Cardio { duration, distance } => domain::SetValues::Cardio {
                duration: duration.into(),
                distance: domain::Distance::new(distance)?,
            },
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: Uuid,
    #[serde(flatten)]
    pub values: SetValues,
    pub completed: bool,
}

impl From<&domain::WorkoutSet> for WorkoutSet {
    fn from(value: &domain::WorkoutSet) -> Self {
        Self {
            id: *value.id,
            values: value.values.into(),
            completed: value.completed,
        }
    }
}

impl TryFrom<WorkoutSet> for domain::WorkoutSet {
    type Error = DataError;

    fn try_from(value: WorkoutSet) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            values: value.values.try_into()?,
            completed: value.completed,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            id: *value.id,
            exercise_id: *value.exercise_id,
            exercise: Exercise::from(&value.exercise),
            sets: value.sets.iter().map(WorkoutSet::from).collect(),
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = DataError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            exercise: value.exercise.try_into()?,
            sets: value
                .sets
                .into_iter()
                .map(domain::WorkoutSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSummary {
    pub total_sets: u32,
    pub total_reps: u32,
    pub total_weight: f64,
    pub exercises_completed: u32,
    pub duration: u64,
}

impl From<domain::WorkoutSummary> for WorkoutSummary {
    fn from(value: domain::WorkoutSummary) -> Self {
        Self {
            total_sets: value.total_sets,
            total_reps: value.total_reps,
            total_weight: value.total_weight,
            exercises_completed: value.exercises_completed,
            duration: value.duration,
        }
    }
}

impl From<WorkoutSummary> for domain::WorkoutSummary {
    fn from(value: WorkoutSummary) -> Self {
        Self {
            total_sets: value.total_sets,
            total_reps: value.total_reps,
            total_weight: value.total_weight,
            exercises_completed: value.exercises_completed,
            duration: value.duration,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
    pub completed: bool,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub summary: Option<WorkoutSummary>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            date: value.date,
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
            completed: value.completed,
            duration: value.duration,
            summary: value.summary.map(WorkoutSummary::from),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = DataError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            date: value.date,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            completed: value.completed,
            duration: value.duration,
            summary: value.summary.map(domain::WorkoutSummary::from),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub exercise_id: Uuid,
    pub exercise: Exercise,
    pub target_sets: u32,
    #[serde(default)]
    pub last_used_values: Option<SetValues>,
}

impl From<&domain::TemplateExercise> for TemplateExercise {
    fn from(value: &domain::TemplateExercise) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            exercise: Exercise::from(&value.exercise),
            target_sets: value.target_sets,
            last_used_values: value.last_used_values.map(SetValues::from),
        }
    }
}

impl TryFrom<TemplateExercise> for domain::TemplateExercise {
    type Error = DataError;

    fn try_from(value: TemplateExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            exercise: value.exercise.try_into()?,
            target_sets: value.target_sets.max(1),
            last_used_values: value
                .last_used_values
                .map(domain::SetValues::try_from)
                .transpose()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutTemplate {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub created_from: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub exercises: Vec<TemplateExercise>,
}

impl From<&domain::WorkoutTemplate> for WorkoutTemplate {
    fn from(value: &domain::WorkoutTemplate) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            created_from: value.created_from.map(|id| *id),
            created_at: value.created_at,
            exercises: value.exercises.iter().map(TemplateExercise::from).collect(),
        }
    }
}

impl TryFrom<WorkoutTemplate> for domain::WorkoutTemplate {
    type Error = DataError;

    fn try_from(value: WorkoutTemplate) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            created_from: value.created_from.map(domain::WorkoutID::from),
            created_at: value.created_at,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::TemplateExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeasurementEntry {
    pub id: Uuid,
    pub kind: MeasurementKind,
    pub value: f64,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::MeasurementEntry> for MeasurementEntry {
    fn from(value: &domain::MeasurementEntry) -> Self {
        Self {
            id: *value.id,
            kind: value.kind.into(),
            value: value.value,
            date: value.date,
            notes: value.notes.clone(),
        }
    }
}

impl From<MeasurementEntry> for domain::MeasurementEntry {
    fn from(value: MeasurementEntry) -> Self {
        Self {
            id: value.id.into(),
            kind: value.kind.into(),
            value: value.value,
            date: value.date,
            notes: value.notes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub weight_unit: WeightUnit,
    pub measurement_unit: MeasurementUnit,
    pub default_rest_time: u32,
}

impl Default for Settings {
    fn default() -> Self {
        domain::Settings::default().into()
    }
}

impl From<domain::Settings> for Settings {
    fn from(value: domain::Settings) -> Self {
        Self {
            theme: value.theme.into(),
            weight_unit: value.weight_unit.into(),
            measurement_unit: value.measurement_unit.into(),
            default_rest_time: value.default_rest_time,
        }
    }
}

impl From<Settings> for domain::Settings {
    fn from(value: Settings) -> Self {
        Self {
            theme: value.theme.into(),
            weight_unit: value.weight_unit.into(),
            measurement_unit: value.measurement_unit.into(),
            default_rest_time: value.default_rest_time,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub settings: Settings,
}

impl From<&domain::UserProfile> for UserProfile {
    fn from(value: &domain::UserProfile) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            avatar: value.avatar.clone(),
            created_at: value.created_at,
            settings: value.settings.into(),
        }
    }
}

impl TryFrom<UserProfile> for domain::UserProfile {
    type Error = DataError;

    fn try_from(value: UserProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            avatar: value.avatar,
            created_at: value.created_at,
            settings: value.settings.into(),
        })
    }
}
