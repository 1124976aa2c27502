//! Record Pipeline - saves user records through a validated, pluggable storage pipeline.
//!
//! A save passes through three independent pieces:
//! 1. A validator that checks the record's required fields
//! 2. A storage backend, chosen by the caller and injected into the service
//! 3. An activity logger that records the outcome with a timestamp
//!
//! # Architecture
//!
//! The crate uses:
//! - `core` for configuration and the shared data types
//! - `domains` for the validation, storage and activity contracts
//! - `adapters` for the concrete local, session, remote and faulty backends
//! - `application` for the `PersistenceService` that ties them together
//!
//! Storage capabilities (`Save`, `Update`, `Delete`, `Synchronize`) are separate
//! traits, and every backend reports failure as a `StorageOutcome` value.
//!
//! # Example
//!
//! ```
//! use record_pipeline::adapters::persistence::{LocalBackend, MemorySink};
//! use record_pipeline::application::PersistenceService;
//! use record_pipeline::core::{Record, StorageOutcome};
//! use record_pipeline::domains::activity::ConsoleLogger;
//!
//! let service = PersistenceService::new(
//!     LocalBackend::new(MemorySink::new()),
//!     ConsoleLogger::stdout(),
//! );
//!
//! let user = Record::new("John Doe", "john@example.com");
//! assert_eq!(service.save(&user), StorageOutcome::Success);
//!
//! let nameless = Record::new("", "john@example.com");
//! assert_eq!(
//!     service.save(&nameless),
//!     StorageOutcome::Failure("invalid record".to_string())
//! );
//! ```

pub mod adapters;
pub mod application;
pub mod core;
pub mod domains;
pub mod errors;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter and an
/// `EnvFilter` read from `RUST_LOG` (default `info`). It should be called once
/// at program start; later calls are ignored.
///
/// # Example
///
/// ```
/// record_pipeline::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
