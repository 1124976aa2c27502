use tracing::{debug, instrument};

use crate::core::{INVALID_RECORD_REASON, Record, StorageOutcome};
use crate::domains::activity::ActivityLog;
use crate::domains::storage::Save;
use crate::domains::validation::{RecordValidator, RequiredFields};

/// Validates a record, hands it to the injected storage, and logs the outcome.
///
/// The service never picks a backend itself; whatever implements `Save` is
/// supplied by the caller. Calls are independent of one another.
pub struct PersistenceService {
    validator: Box<dyn RecordValidator>,
    storage: Box<dyn Save>,
    logger: Box<dyn ActivityLog>,
}

impl PersistenceService {
    /// Build a service that validates with [`RequiredFields`].
    pub fn new(storage: impl Save + 'static, logger: impl ActivityLog + 'static) -> Self {
        Self::with_validator(RequiredFields, storage, logger)
    }

    pub fn with_validator(
        validator: impl RecordValidator + 'static,
        storage: impl Save + 'static,
        logger: impl ActivityLog + 'static,
    ) -> Self {
        Self {
            validator: Box::new(validator),
            storage: Box::new(storage),
            logger: Box::new(logger),
        }
    }

    /// Save `record`, returning the storage outcome unchanged.
    ///
    /// An invalid record yields `Failure("invalid record")` without touching
    /// storage. Exactly one activity line is logged per call.
    #[instrument(skip_all)]
    pub fn save(&self, record: &Record) -> StorageOutcome {
        let outcome = if self.validator.is_valid(record) {
            debug!("Record valid, delegating to storage");
            self.storage.save(record)
        } else {
            debug!("Record invalid, skipping storage");
            StorageOutcome::failure(INVALID_RECORD_REASON)
        };

        self.logger.log(&outcome.to_string());
        outcome
    }
}
