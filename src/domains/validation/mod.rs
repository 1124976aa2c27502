//! Record validation.

use crate::core::Record;

/// A rule deciding whether a record may be handed to storage.
pub trait RecordValidator: Send + Sync {
    fn is_valid(&self, record: &Record) -> bool;
}

/// Requires both `name` and `email` to be non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl RecordValidator for RequiredFields {
    fn is_valid(&self, record: &Record) -> bool {
        is_valid(record)
    }
}

/// Returns true iff the record's name and email are both present.
///
/// Whitespace-only text counts as present.
#[must_use]
pub fn is_valid(record: &Record) -> bool {
    !record.name().is_empty() && !record.email().is_empty()
}
