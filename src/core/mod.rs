//! Configuration and the data types shared by every layer.

pub mod config;
pub mod models;

pub use models::{ActivityLogEntry, INVALID_RECORD_REASON, Record, StorageOutcome};
