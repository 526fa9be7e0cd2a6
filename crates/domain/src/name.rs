use derive_more::{AsRef, Display};

pub const MAX_NAME_LEN: usize = 64;

/// Trimmed, non-empty name of a workout, template or profile.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        match name.chars().count() {
            len if len > MAX_NAME_LEN => Err(NameError::TooLong(len)),
            _ => Ok(Name(name.to_string())),
        }
    }

    /// Append a suffix, keeping the name unchanged if the result would be too long.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self::new(&format!("{} {suffix}", self.0)).unwrap_or_else(|_| self.clone())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, used to detect duplicate names.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be {MAX_NAME_LEN} characters or fewer ({0} > {MAX_NAME_LEN})")]
    TooLong(usize),
}
