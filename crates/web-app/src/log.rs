use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("log is not initialized")]
    NotInitialized,
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn new(level: Level, message: String) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level,
            message,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Install the logger. Records up to `max_level` go to the browser console and to `repository`.
///
/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init(
    repository: Arc<Mutex<dyn Repository>>,
    max_level: LevelFilter,
) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

/// Stored log entries, newest first.
///
/// # Errors
///
/// Returns an error if the logger is not initialized or the entries cannot be read.
pub fn entries() -> Result<VecDeque<Entry>, Error> {
    let repository = LOG
        .lock()
        .map_err(|err| Error::Unknown(err.to_string()))?
        .clone()
        .ok_or(Error::NotInitialized)?;
    repository
        .lock()
        .map_err(|err| Error::Unknown(err.to_string()))?
        .read_entries()
}

struct Logger;

impl Logger {
    fn write(record: &Record) {
        let Ok(log) = LOG.lock() else {
            return;
        };
        let Some(repository) = log.as_ref() else {
            return;
        };
        if let Ok(repository) = repository.lock() {
            let _ = repository.write_entry(Entry::new(record.level(), record.args().to_string()));
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            Level::Error => gloo_console::error!(message),
            Level::Warn => gloo_console::warn!(message),
            Level::Info => gloo_console::info!(message),
            Level::Debug | Level::Trace => gloo_console::debug!(message),
        }
        Self::write(record);
    }

    fn flush(&self) {}
}
