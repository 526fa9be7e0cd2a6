#![warn(clippy::pedantic)]

use ironlog_domain as domain;
use log::warn;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use strum::AsRefStr;

pub mod dto;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;

/// Key-value store holding JSON values.
///
/// A missing key is not an error and reads as `None`.
#[allow(clippy::missing_errors_doc)]
pub trait Backend {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, domain::StorageError>;
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), domain::StorageError>;
    fn remove(&self, key: &str) -> Result<(), domain::StorageError>;
}

impl<B: Backend> Backend for std::rc::Rc<B> {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, domain::StorageError> {
        self.as_ref().get(key)
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), domain::StorageError> {
        self.as_ref().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), domain::StorageError> {
        self.as_ref().remove(key)
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "profiles")]
    Profiles,
    #[strum(serialize = "current_workout")]
    CurrentWorkout,
    #[strum(serialize = "workout_timer")]
    Elapsed,
    #[strum(serialize = "workout_history")]
    History,
    #[strum(serialize = "workout_templates")]
    Templates,
    #[strum(serialize = "measurements")]
    Measurements,
}

impl Key {
    /// Storage key of a profile's collection, e.g. "<profile uuid>/workout_history".
    #[must_use]
    pub fn for_profile(self, profile_id: domain::ProfileID) -> String {
        format!("{}/{}", *profile_id, self.as_ref())
    }
}

/// Repository implementations on top of a [`Backend`].
pub struct Repository<B> {
    backend: B,
}

impl<B: Backend> Repository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read a list, skipping entries that cannot be converted.
    fn read_list<T, D>(&self, key: &str) -> Result<Vec<T>, domain::ReadError>
    where
        D: DeserializeOwned + TryInto<T>,
        <D as TryInto<T>>::Error: std::fmt::Display,
    {
        Ok(self
            .backend
            .get::<Vec<Value>>(key)?
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| {
                convert::<T, D>(value)
                    .map_err(|err| warn!("skipped invalid entry in {key}: {err}"))
                    .ok()
            })
            .collect())
    }

    /// Write a list. Stored entries that cannot be converted are kept after the given items.
    fn write_list<T, D>(&self, key: &str, items: &[T]) -> Result<(), domain::WriteError>
    where
        D: for<'a> From<&'a T> + Serialize + DeserializeOwned + TryInto<T>,
        <D as TryInto<T>>::Error: std::fmt::Display,
    {
        let mut values = items
            .iter()
            .map(|item| serde_json::to_value(D::from(item)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| domain::StorageError::Serialization(err.to_string()))?;
        let invalid = self
            .backend
            .get::<Vec<Value>>(key)
            .ok()
            .flatten()
            .unwrap_or_default()
            .into_iter()
            .filter(|value| convert::<T, D>(value.clone()).is_err())
            .collect::<Vec<_>>();
        if !invalid.is_empty() {
            warn!("keeping {} invalid entries in {key}", invalid.len());
        }
        values.extend(invalid);
        Ok(self.backend.set(key, &values)?)
    }
}

fn convert<T, D>(value: Value) -> Result<T, String>
where
    D: DeserializeOwned + TryInto<T>,
    <D as TryInto<T>>::Error: std::fmt::Display,
{
    let dto = serde_json::from_value::<D>(value).map_err(|err| err.to_string())?;
    TryInto::<T>::try_into(dto).map_err(|err| err.to_string())
}

impl<B: Backend> domain::SessionRepository for Repository<B> {
    fn read_current_workout(
        &self,
        profile_id: domain::ProfileID,
    ) -> Result<Option<domain::Workout>, domain::ReadError> {
        self.backend
            .get::<dto::Workout>(&Key::CurrentWorkout.for_profile(profile_id))?
            .map(|workout| {
                domain::Workout::try_from(workout).map_err(|err| {
                    domain::ReadError::from(domain::StorageError::Serialization(err.to_string()))
                })
            })
            .transpose()
    }

    fn write_current_workout(
        &self,
        profile_id: domain::ProfileID,
        workout: Option<&domain::Workout>,
    ) -> Result<(), domain::WriteError> {
        let key = Key::CurrentWorkout.for_profile(profile_id);
        match workout {
            Some(workout) => self.backend.set(&key, &dto::Workout::from(workout))?,
            None => self.backend.remove(&key)?,
        }
        Ok(())
    }

    fn read_elapsed(&self, profile_id: domain::ProfileID) -> Result<u64, domain::ReadError> {
        Ok(self
            .backend
            .get::<u64>(&Key::Elapsed.for_profile(profile_id))?
            .unwrap_or_default())
    }

    fn write_elapsed(
        &self,
        profile_id: domain::ProfileID,
        seconds: u64,
    ) -> Result<(), domain::WriteError> {
        Ok(self
            .backend
            .set(&Key::Elapsed.for_profile(profile_id), &seconds)?)
    }

    fn read_history(
        &self,
        profile_id: domain::ProfileID,
    ) -> Result<Vec<domain::Workout>, domain::ReadError> {
        self.read_list::<_, dto::Workout>(&Key::History.for_profile(profile_id))
    }

    fn write_history(
        &self,
        profile_id: domain::ProfileID,
        history: &[domain::Workout],
    ) -> Result<(), domain::WriteError> {
        self.write_list::<_, dto::Workout>(&Key::History.for_profile(profile_id), history)
    }

    fn read_templates(
        &self,
        profile_id: domain::ProfileID,
    ) -> Result<Vec<domain::WorkoutTemplate>, domain::ReadError> {
        self.read_list::<_, dto::WorkoutTemplate>(&Key::Templates.for_profile(profile_id))
    }

    fn write_templates(
        &self,
        profile_id: domain::ProfileID,
        templates: &[domain::WorkoutTemplate],
    ) -> Result<(), domain::WriteError> {
        self.write_list::<_, dto::WorkoutTemplate>(
            &Key::Templates.for_profile(profile_id),
            templates,
        )
    }
}

impl<B: Backend> domain::MeasurementRepository for Repository<B> {
    fn read_measurements(
        &self,
        profile_id: domain::ProfileID,
    ) -> Result<Vec<domain::MeasurementEntry>, domain::ReadError> {
        self.read_list::<_, dto::MeasurementEntry>(&Key::Measurements.for_profile(profile_id))
    }

    fn write_measurements(
        &self,
        profile_id: domain::ProfileID,
        measurements: &[domain::MeasurementEntry],
    ) -> Result<(), domain::WriteError> {
        self.write_list::<_, dto::MeasurementEntry>(
            &Key::Measurements.for_profile(profile_id),
            measurements,
        )
    }
}

impl<B: Backend> domain::ProfileRepository for Repository<B> {
    fn read_profiles(&self) -> Result<Vec<domain::UserProfile>, domain::ReadError> {
        self.read_list::<_, dto::UserProfile>(Key::Profiles.as_ref())
    }

    fn write_profiles(&self, profiles: &[domain::UserProfile]) -> Result<(), domain::WriteError> {
        self.write_list::<_, dto::UserProfile>(Key::Profiles.as_ref(), profiles)
    }
}
