//! Remote storage: a record is sent as one request/response exchange.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::core::{Record, StorageOutcome};
use crate::domains::storage::{Save, Synchronize};
use crate::errors::PersistError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteAction {
    Save,
    Sync,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoteRequest {
    pub request_id: Uuid,
    pub action: RemoteAction,
    pub record: Option<Record>,
}

impl RemoteRequest {
    pub fn save(record: &Record) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            action: RemoteAction::Save,
            record: Some(record.clone()),
        }
    }

    #[must_use]
    pub fn sync() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            action: RemoteAction::Sync,
            record: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RemoteResponse {
    pub status: u16,
}

impl RemoteResponse {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The channel a remote backend sends requests through.
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns `PersistError::TransportError` if no response was received.
    fn send(&self, request: &RemoteRequest) -> Result<RemoteResponse, PersistError>;
}

/// Stand-in transport that completes instantly with a preset result.
#[derive(Debug, Clone, Default)]
pub enum SimulatedTransport {
    #[default]
    Accept,
    Reject(u16),
    Fail(String),
}

impl SimulatedTransport {
    #[must_use]
    pub fn timeout() -> Self {
        SimulatedTransport::Fail("request timed out".to_string())
    }
}

impl Transport for SimulatedTransport {
    fn send(&self, request: &RemoteRequest) -> Result<RemoteResponse, PersistError> {
        debug!(request_id = %request.request_id, action = ?request.action, "Simulated remote call");
        match self {
            SimulatedTransport::Accept => Ok(RemoteResponse { status: 200 }),
            SimulatedTransport::Reject(status) => Ok(RemoteResponse { status: *status }),
            SimulatedTransport::Fail(reason) => Err(PersistError::TransportError(reason.clone())),
        }
    }
}

/// POSTs the request as JSON to a fixed endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, PersistError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &RemoteRequest) -> Result<RemoteResponse, PersistError> {
        debug!(
            request_id = %request.request_id,
            endpoint = %self.endpoint,
            "Sending request to remote storage"
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()?;
        Ok(RemoteResponse {
            status: response.status().as_u16(),
        })
    }
}

fn exchange<T: Transport>(transport: &T, request: &RemoteRequest) -> StorageOutcome {
    match transport.send(request) {
        Ok(response) if response.is_accepted() => StorageOutcome::Success,
        Ok(response) => {
            warn!(
                request_id = %request.request_id,
                status = response.status,
                "Remote storage rejected request"
            );
            StorageOutcome::failure(format!("remote rejected: status {}", response.status))
        }
        Err(e) => {
            warn!(request_id = %request.request_id, error = %e, "Remote storage unreachable");
            StorageOutcome::failure(e.to_string())
        }
    }
}

/// Save-only remote backend.
pub struct RemoteBackend<T = SimulatedTransport> {
    transport: T,
}

impl RemoteBackend<SimulatedTransport> {
    #[must_use]
    pub fn simulated() -> Self {
        Self::new(SimulatedTransport::Accept)
    }
}

impl<T: Transport> RemoteBackend<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> Save for RemoteBackend<T> {
    fn save(&self, record: &Record) -> StorageOutcome {
        let request = RemoteRequest::save(record);

        #[cfg(feature = "debug-logs")]
        info!(request_id = %request.request_id, ?record, "Sending record to remote storage");

        #[cfg(not(feature = "debug-logs"))]
        info!(request_id = %request.request_id, "Sending record to remote storage");

        exchange(&self.transport, &request)
    }
}

/// Remote backend that can also push a sync request to the server.
pub struct SyncingRemoteBackend<T = SimulatedTransport> {
    inner: RemoteBackend<T>,
}

impl<T: Transport> SyncingRemoteBackend<T> {
    pub fn new(transport: T) -> Self {
        Self {
            inner: RemoteBackend::new(transport),
        }
    }
}

impl<T: Transport> Save for SyncingRemoteBackend<T> {
    fn save(&self, record: &Record) -> StorageOutcome {
        self.inner.save(record)
    }
}

impl<T: Transport> Synchronize for SyncingRemoteBackend<T> {
    fn sync_with_server(&self) -> StorageOutcome {
        let request = RemoteRequest::sync();
        info!(request_id = %request.request_id, "Syncing with remote storage");
        exchange(&self.inner.transport, &request)
    }
}
