use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use ironlog_domain as domain;
use ironlog_web_app::log;
use serde::{Serialize, de::DeserializeOwned};

use crate::Backend;

/// Browser local storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl Backend for LocalStorage {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, domain::StorageError> {
        match gloo_storage::LocalStorage::get(key) {
            Ok(value) => Ok(Some(value)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::delete(key);
        Ok(())
    }
}

fn storage_error(err: gloo_storage::errors::StorageError) -> domain::StorageError {
    match err {
        gloo_storage::errors::StorageError::SerdeError(err) => {
            domain::StorageError::Serialization(err.to_string())
        }
        err => domain::StorageError::Other(Box::new(err)),
    }
}

/// Log entries in local storage, newest first.
pub struct Log;

const KEY_LOG: &str = "log";
const MAX_LOG_ENTRIES: usize = 100;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        LocalStorage
            .get(KEY_LOG)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        LocalStorage
            .set(KEY_LOG, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod wasm {
    use gloo_storage::Storage as _;
    use ironlog_domain::{self as domain, SessionRepository};
    use ironlog_web_app::log::{Entry, Repository as _};
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use crate::{
        Backend, Key, Repository,
        tests::data::{PROFILE, PROFILE_2, WORKOUT},
    };

    use super::{LocalStorage, Log, MAX_LOG_ENTRIES};

    wasm_bindgen_test_configure!(run_in_browser);

    fn reset() {
        gloo_storage::LocalStorage::clear();
    }

    #[wasm_bindgen_test]
    fn test_missing_key() {
        reset();
        assert_eq!(LocalStorage.get::<u64>("workout_timer").unwrap(), None);
        LocalStorage.remove("workout_timer").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_set_get_remove() {
        reset();
        LocalStorage.set("workout_timer", &42_u64).unwrap();
        assert_eq!(LocalStorage.get::<u64>("workout_timer").unwrap(), Some(42));
        LocalStorage.remove("workout_timer").unwrap();
        assert_eq!(LocalStorage.get::<u64>("workout_timer").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_invalid_value() {
        reset();
        gloo_storage::LocalStorage::raw()
            .set_item("workout_timer", "{")
            .unwrap();
        assert!(matches!(
            LocalStorage.get::<u64>("workout_timer"),
            Err(domain::StorageError::Serialization(_))
        ));
    }

    #[wasm_bindgen_test]
    fn test_session() {
        reset();
        let repository = Repository::new(LocalStorage);
        repository
            .write_current_workout(PROFILE.id, Some(&*WORKOUT))
            .unwrap();
        repository.write_elapsed(PROFILE.id, 7).unwrap();

        assert_eq!(
            repository.read_current_workout(PROFILE.id).unwrap(),
            Some(WORKOUT.clone())
        );
        assert_eq!(repository.read_elapsed(PROFILE.id).unwrap(), 7);
        assert_eq!(repository.read_current_workout(PROFILE_2.id).unwrap(), None);
        assert!(
            gloo_storage::LocalStorage::raw()
                .get_item(&Key::Elapsed.for_profile(PROFILE.id))
                .unwrap()
                .is_some()
        );

        repository.write_current_workout(PROFILE.id, None).unwrap();
        assert_eq!(repository.read_current_workout(PROFILE.id).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_log() {
        reset();
        assert!(Log.read_entries().unwrap().is_empty());

        for i in 0..105 {
            Log.write_entry(Entry {
                time: "Jun 01 08:00:00".to_string(),
                level: log::Level::Info,
                message: i.to_string(),
            })
            .unwrap();
        }

        let entries = Log.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(entries.front().map(|e| e.message.as_str()), Some("104"));
        assert_eq!(entries.back().map(|e| e.message.as_str()), Some("5"));
    }
}
