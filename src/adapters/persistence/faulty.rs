use tracing::debug;

use crate::core::{Record, StorageOutcome};
use crate::domains::storage::Save;

pub const STORAGE_ERROR: &str = "storage error";

/// A backend whose every save fails, reported as a value like any other outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultyBackend;

impl Save for FaultyBackend {
    fn save(&self, _record: &Record) -> StorageOutcome {
        debug!("Attempting to save record in faulty storage");
        StorageOutcome::failure(STORAGE_ERROR)
    }
}
