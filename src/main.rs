//! Demo driver: wires the configured backend into a `PersistenceService` and
//! runs the example saves against it.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use record_pipeline::adapters::persistence::{
    FaultyBackend, FileSink, HttpTransport, KeyValueSink, LocalBackend, MemorySink,
    SimulatedTransport, SyncingRemoteBackend, Transport,
};
use record_pipeline::application::PersistenceService;
use record_pipeline::core::config::{AppConfig, BackendKind};
use record_pipeline::core::{Record, StorageOutcome};
use record_pipeline::domains::activity::ConsoleLogger;
use record_pipeline::domains::storage::{Delete, Save, Synchronize, Update};

fn report(operation: &str, outcome: &StorageOutcome) {
    match outcome {
        StorageOutcome::Success => info!(operation, "Operation succeeded"),
        StorageOutcome::Failure(reason) => warn!(operation, reason = %reason, "Operation failed"),
    }
}

fn run_pipeline(storage: impl Save + 'static) {
    let service = PersistenceService::new(storage, ConsoleLogger::stdout());

    let user = Record::new("John Doe", "john@example.com");
    report("save", &service.save(&user));

    let nameless = Record::new("", "john@example.com");
    report("save", &service.save(&nameless));
}

fn run_local<S: KeyValueSink + 'static>(backend: LocalBackend<S>) {
    let backend = Arc::new(backend);
    run_pipeline(Arc::clone(&backend));

    let updated = Record::new("John Doe", "john.doe@example.com");
    report("update", &backend.update(&updated));
    report("delete", &backend.delete(&updated));
}

fn run_remote<T: Transport + 'static>(transport: T) {
    let backend = Arc::new(SyncingRemoteBackend::new(transport));
    run_pipeline(Arc::clone(&backend));
    report("sync", &backend.sync_with_server());
}

fn main() -> Result<()> {
    record_pipeline::setup_logging();

    let config = AppConfig::from_env().context("loading configuration")?;
    info!(backend = ?config.backend, key = %config.storage_key, "Starting record pipeline");

    match config.backend {
        BackendKind::Local => match &config.local_store_path {
            Some(path) => run_local(LocalBackend::with_key(
                FileSink::new(path),
                &config.storage_key,
            )),
            None => run_local(LocalBackend::with_key(MemorySink::new(), &config.storage_key)),
        },
        BackendKind::Session => {
            run_local(LocalBackend::with_key(MemorySink::new(), &config.storage_key));
        }
        BackendKind::Remote => match &config.remote_endpoint {
            Some(endpoint) => run_remote(
                HttpTransport::new(endpoint.clone(), config.remote_timeout)
                    .context("building HTTP transport")?,
            ),
            None => run_remote(SimulatedTransport::Accept),
        },
        BackendKind::Faulty => run_pipeline(FaultyBackend),
    }

    Ok(())
}
