use tracing::{debug, warn};

use super::sink::{KeyValueSink, MemorySink};
use crate::core::config::DEFAULT_STORAGE_KEY;
use crate::core::{Record, StorageOutcome};
use crate::domains::storage::{Delete, Save, Update};
use crate::errors::PersistError;

pub const SINK_UNAVAILABLE: &str = "sink unavailable";
pub const RECORD_NOT_FOUND: &str = "record not found";

/// Stores the record as JSON under a single fixed key of a key-value sink.
pub struct LocalBackend<S> {
    sink: S,
    key: String,
}

/// Session-scoped storage: a local backend whose sink lives in process memory.
pub type SessionBackend = LocalBackend<MemorySink>;

impl SessionBackend {
    #[must_use]
    pub fn session() -> Self {
        LocalBackend::new(MemorySink::new())
    }
}

impl<S: KeyValueSink> LocalBackend<S> {
    pub fn new(sink: S) -> Self {
        Self::with_key(sink, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(sink: S, key: impl Into<String>) -> Self {
        Self {
            sink,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Read back the stored record, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be read or holds a value that is
    /// not a record.
    pub fn load(&self) -> Result<Option<Record>, PersistError> {
        self.sink
            .get(&self.key)?
            .map(|json| serde_json::from_str(&json).map_err(PersistError::from))
            .transpose()
    }

    fn write(&self, record: &Record) -> Result<(), PersistError> {
        let json = serde_json::to_string(record)?;
        self.sink.set(&self.key, &json)
    }

    fn exists(&self) -> Result<bool, PersistError> {
        Ok(self.sink.get(&self.key)?.is_some())
    }
}

fn sink_failure(operation: &str, error: &PersistError) -> StorageOutcome {
    warn!(operation, error = %error, "Local sink fault");
    StorageOutcome::failure(SINK_UNAVAILABLE)
}

impl<S: KeyValueSink> Save for LocalBackend<S> {
    fn save(&self, record: &Record) -> StorageOutcome {
        #[cfg(feature = "debug-logs")]
        debug!(key = %self.key, ?record, "Saving record to local sink");

        #[cfg(not(feature = "debug-logs"))]
        debug!(key = %self.key, "Saving record to local sink");

        match self.write(record) {
            Ok(()) => StorageOutcome::Success,
            Err(e) => sink_failure("save", &e),
        }
    }
}

impl<S: KeyValueSink> Update for LocalBackend<S> {
    fn update(&self, record: &Record) -> StorageOutcome {
        debug!(key = %self.key, "Updating record in local sink");
        match self.exists() {
            Ok(false) => StorageOutcome::failure(RECORD_NOT_FOUND),
            Ok(true) => match self.write(record) {
                Ok(()) => StorageOutcome::Success,
                Err(e) => sink_failure("update", &e),
            },
            Err(e) => sink_failure("update", &e),
        }
    }
}

impl<S: KeyValueSink> Delete for LocalBackend<S> {
    fn delete(&self, _record: &Record) -> StorageOutcome {
        debug!(key = %self.key, "Deleting record from local sink");
        match self.sink.remove(&self.key) {
            Ok(true) => StorageOutcome::Success,
            Ok(false) => StorageOutcome::failure(RECORD_NOT_FOUND),
            Err(e) => sink_failure("delete", &e),
        }
    }
}
