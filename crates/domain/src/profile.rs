use chrono::{DateTime, Utc};
use log::{debug, error};

use crate::{
    MeasurementUnit, Name, ReadError, ValidationError, WeightUnit, WriteError, id::uuid_id,
};

uuid_id!(ProfileID);

/// Rest time in seconds used when a profile has not configured one.
pub const DEFAULT_REST_TIME: u32 = 90;

pub trait ProfileRepository {
    fn read_profiles(&self) -> Result<Vec<UserProfile>, ReadError>;
    fn write_profiles(&self, profiles: &[UserProfile]) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: ProfileID,
    pub name: Name,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub settings: Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub weight_unit: WeightUnit,
    pub measurement_unit: MeasurementUnit,
    /// Seconds
    pub default_rest_time: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            weight_unit: WeightUnit::default(),
            measurement_unit: MeasurementUnit::default(),
            default_rest_time: DEFAULT_REST_TIME,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Profile management on top of a [`ProfileRepository`].
pub struct Profiles<R> {
    repository: R,
}

impl<R: ProfileRepository> Profiles<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn get_profiles(&self) -> Result<Vec<UserProfile>, ReadError> {
        self.repository.read_profiles().inspect_err(|err| {
            error!("failed to get profiles: {err}");
        })
    }

    pub fn create_profile(&self, name: Name, avatar: &str) -> Result<UserProfile, WriteError> {
        let mut profiles = self.get_profiles()?;
        let profile = UserProfile {
            id: ProfileID::new(),
            name,
            avatar: avatar.to_string(),
            created_at: Utc::now(),
            settings: Settings::default(),
        };
        profiles.push(profile.clone());
        self.write(&profiles)?;
        debug!("created profile {}", profile.id);
        Ok(profile)
    }

    /// Replace the stored profile with the same id. Unknown profiles are ignored.
    pub fn replace_profile(&self, profile: UserProfile) -> Result<UserProfile, WriteError> {
        let mut profiles = self.get_profiles()?;
        if let Some(p) = profiles.iter_mut().find(|p| p.id == profile.id) {
            *p = profile.clone();
            self.write(&profiles)?;
        }
        Ok(profile)
    }

    pub fn update_settings(
        &self,
        id: ProfileID,
        settings: Settings,
    ) -> Result<Option<UserProfile>, WriteError> {
        let mut profiles = self.get_profiles()?;
        let Some(profile) = profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        profile.settings = settings;
        let profile = profile.clone();
        self.write(&profiles)?;
        Ok(Some(profile))
    }

    pub fn delete_profile(&self, id: ProfileID) -> Result<ProfileID, WriteError> {
        let mut profiles = self.get_profiles()?;
        profiles.retain(|p| p.id != id);
        self.write(&profiles)?;
        debug!("deleted profile {id}");
        Ok(id)
    }

    /// Settings of a profile, or the defaults if the profile is unknown.
    pub fn settings(&self, id: ProfileID) -> Settings {
        self.get_profiles()
            .ok()
            .and_then(|profiles| profiles.into_iter().find(|p| p.id == id))
            .map(|p| p.settings)
            .unwrap_or_default()
    }

    pub fn validate_profile_name(
        &self,
        name: &str,
        id: ProfileID,
    ) -> Result<Name, ValidationError> {
        let name = Name::new(name).map_err(|err| ValidationError::Other(err.to_string()))?;
        let profiles = self
            .get_profiles()
            .map_err(|err| ValidationError::Other(err.to_string()))?;
        if profiles.iter().all(|p| p.id == id || !p.name.matches(name.as_str())) {
            Ok(name)
        } else {
            Err(ValidationError::Conflict("name".to_string()))
        }
    }

    fn write(&self, profiles: &[UserProfile]) -> Result<(), WriteError> {
        self.repository.write_profiles(profiles).inspect_err(|err| {
            error!("failed to write profiles: {err}");
        })
    }
}
