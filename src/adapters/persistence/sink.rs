//! Key-value sinks that local backends write serialized records into.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::errors::PersistError;

/// A string key-value store with fallible operations.
pub trait KeyValueSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `PersistError::SinkError` if the sink cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// # Errors
    ///
    /// Returns `PersistError::SinkError` if the sink cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Remove `key`, returning whether it was present.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::SinkError` if the sink cannot be written.
    fn remove(&self, key: &str) -> Result<bool, PersistError>;
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, PersistError> {
    mutex
        .lock()
        .map_err(|_| PersistError::SinkError("sink lock poisoned".to_string()))
}

/// In-process sink. Contents live exactly as long as the value.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSink for MemorySink {
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        lock(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<bool, PersistError> {
        Ok(lock(&self.entries)?.remove(key).is_some())
    }
}

/// Sink backed by a JSON object file, rewritten in full on every change.
///
/// A missing file reads as an empty store.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            let path = self.path.display();
            PersistError::SinkError(format!("{path}: invalid store format - {e}"))
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), keys = entries.len(), "Wrote file sink");
        Ok(())
    }
}

impl KeyValueSink for FileSink {
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let _guard = lock(&self.guard)?;
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let _guard = lock(&self.guard)?;
        Ok(self.read_all()?.remove(key))
    }

    fn remove(&self, key: &str) -> Result<bool, PersistError> {
        let _guard = lock(&self.guard)?;
        let mut entries = self.read_all()?;
        let removed = entries.remove(key).is_some();
        if removed {
            self.write_all(&entries)?;
        }
        Ok(removed)
    }
}
