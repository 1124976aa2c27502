use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PersistError;

/// Failure reason produced when a record does not pass validation.
pub const INVALID_RECORD_REASON: &str = "invalid record";

/// A user record handed to the persistence pipeline.
///
/// Fields are private so a record cannot change after construction. Missing
/// fields in JSON input decode as empty strings, which validation rejects.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

impl Record {
    /// Create a new `Record` with the given name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Value-based result of a storage operation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StorageOutcome {
    Success,
    Failure(String),
}

impl StorageOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        StorageOutcome::Failure(reason.into())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, StorageOutcome::Success)
    }

    /// The failure reason, or `None` for a success.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            StorageOutcome::Success => None,
            StorageOutcome::Failure(reason) => Some(reason),
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    ///
    /// Failures are classified by their reason text: any failure whose reason
    /// is exactly [`INVALID_RECORD_REASON`] maps to `InvalidRecord`, including
    /// one reported by a backend rather than by validation.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::InvalidRecord` for a validation failure and
    /// `PersistError::StorageFailure` for every other failure.
    pub fn into_result(self) -> Result<(), PersistError> {
        match self {
            StorageOutcome::Success => Ok(()),
            StorageOutcome::Failure(reason) if reason == INVALID_RECORD_REASON => {
                Err(PersistError::InvalidRecord)
            }
            StorageOutcome::Failure(reason) => Err(PersistError::StorageFailure(reason)),
        }
    }
}

impl fmt::Display for StorageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOutcome::Success => write!(f, "saved"),
            StorageOutcome::Failure(reason) => write!(f, "save failed: {reason}"),
        }
    }
}

/// A single timestamped activity line. Written to a sink, never retained.
#[derive(Debug, Clone)]
pub struct ActivityLogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl ActivityLogEntry {
    /// Stamp `message` with the current UTC time.
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ActivityLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.message
        )
    }
}
