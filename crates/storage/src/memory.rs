use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

use ironlog_domain as domain;
use serde::{Serialize, de::DeserializeOwned};

use crate::Backend;

/// In-process backend keeping serialized values in a map.
#[derive(Debug, Default)]
pub struct Memory {
    entries: RefCell<BTreeMap<String, String>>,
    unavailable: Cell<bool>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Let all subsequent writes fail until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn check(&self) -> Result<(), domain::StorageError> {
        if self.unavailable.get() {
            return Err(domain::StorageError::Unavailable);
        }
        Ok(())
    }
}

impl Backend for Memory {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, domain::StorageError> {
        self.entries
            .borrow()
            .get(key)
            .map(|value| serde_json::from_str(value))
            .transpose()
            .map_err(|err| domain::StorageError::Serialization(err.to_string()))
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), domain::StorageError> {
        self.check()?;
        let value = serde_json::to_string(value)
            .map_err(|err| domain::StorageError::Serialization(err.to_string()))?;
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), domain::StorageError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
