//! Storage capabilities.
//!
//! Each capability is its own trait so a backend implements only what it
//! supports. A save-only backend has no `update` method to call, which keeps
//! "unsupported operation" out of the runtime entirely.
//!
//! Every method reports expected failures as `StorageOutcome::Failure` and
//! never panics, so any implementation can stand in for any other.
//!
//! ```compile_fail
//! use record_pipeline::adapters::persistence::RemoteBackend;
//! use record_pipeline::core::Record;
//! use record_pipeline::domains::storage::Update;
//!
//! // RemoteBackend is save-only; there is no update to call.
//! RemoteBackend::simulated().update(&Record::new("John Doe", "john@example.com"));
//! ```

use std::sync::Arc;

use crate::core::{Record, StorageOutcome};

/// Persist a record.
pub trait Save: Send + Sync {
    fn save(&self, record: &Record) -> StorageOutcome;
}

/// Replace a previously saved record.
pub trait Update: Send + Sync {
    fn update(&self, record: &Record) -> StorageOutcome;
}

/// Remove a previously saved record.
pub trait Delete: Send + Sync {
    fn delete(&self, record: &Record) -> StorageOutcome;
}

/// Push locally held state to a server.
pub trait Synchronize: Send + Sync {
    fn sync_with_server(&self) -> StorageOutcome;
}

impl<T: Save + ?Sized> Save for Box<T> {
    fn save(&self, record: &Record) -> StorageOutcome {
        (**self).save(record)
    }
}

impl<T: Save + ?Sized> Save for Arc<T> {
    fn save(&self, record: &Record) -> StorageOutcome {
        (**self).save(record)
    }
}

impl<T: Update + ?Sized> Update for Arc<T> {
    fn update(&self, record: &Record) -> StorageOutcome {
        (**self).update(record)
    }
}

impl<T: Delete + ?Sized> Delete for Arc<T> {
    fn delete(&self, record: &Record) -> StorageOutcome {
        (**self).delete(record)
    }
}
