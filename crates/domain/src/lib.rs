#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod exercise;
mod id;
mod measurement;
mod name;
mod notification;
mod profile;
mod rest_timer;
mod session;
mod statistics;
mod template;
mod unit;
mod workout;

pub use error::{ReadError, StorageError, ValidationError, WriteError};
pub use exercise::{
    Category, Equipment, Exercise, ExerciseFilter, ExerciseID, MuscleGroup, Property,
};
pub use measurement::{
    MeasurementEntry, MeasurementID, MeasurementKind, MeasurementLog, MeasurementRepository,
    Progress, QuantityKind, validate_measurement_value,
};
pub use name::{MAX_NAME_LEN, Name, NameError};
pub use notification::{Notification, NotificationKind, Notifier};
pub use profile::{
    DEFAULT_REST_TIME, ProfileID, ProfileRepository, Profiles, Settings, Theme, UserProfile,
};
pub use rest_timer::{RestTimer, RestTimerEvent, RestTimerState, format_time};
pub use session::{
    SessionError, SessionRepository, SessionState, WorkoutSessionStore, format_elapsed,
};
pub use statistics::{RECENT_DAYS, Statistics, format_duration};
pub use template::{DEFAULT_TARGET_SETS, TemplateExercise, TemplateID, WorkoutTemplate};
pub use unit::{
    MeasurementUnit, Quantity, Unit, UnitConverter, WeightUnit, convert_length,
    convert_length_to_storage, convert_weight, convert_weight_to_storage,
};
pub use workout::{
    Distance, DistanceError, Reps, RepsError, Seconds, SetUpdate, SetValues, Weight, WeightError,
    Workout, WorkoutExercise, WorkoutExerciseID, WorkoutID, WorkoutSet, WorkoutSetID,
    WorkoutSummary,
};
