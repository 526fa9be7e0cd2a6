#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ReadError> for WriteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => WriteError::Storage(storage),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("invalid stored data: {0}")]
    Serialization(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(String),
    #[error("{0} must be a positive number")]
    NotPositive(String),
    #[error("{0} must be a decimal number")]
    Parse(String),
    #[error("{0} is already in use")]
    Conflict(String),
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_from_read_error() {
        assert!(matches!(
            WriteError::from(ReadError::Storage(StorageError::Unavailable)),
            WriteError::Storage(StorageError::Unavailable)
        ));
        assert!(matches!(
            WriteError::from(ReadError::Storage(StorageError::Other("foo".into()))),
            WriteError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::NotPositive("Value".to_string()).to_string(),
            "Value must be a positive number"
        );
        assert_eq!(
            ValidationError::Empty("Name".to_string()).to_string(),
            "Name must not be empty"
        );
    }
}
