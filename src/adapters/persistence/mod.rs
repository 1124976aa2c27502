//! Persistence adapters implementing the storage capabilities.
//!
//! - sink: key-value stores (in-memory, JSON file)
//! - local: fixed-key backends over a sink, including the session variant
//! - remote: request/response backends over a transport
//! - faulty: a backend that always fails

pub mod faulty;
pub mod local;
pub mod remote;
pub mod sink;

pub use faulty::FaultyBackend;
pub use local::{LocalBackend, SessionBackend};
pub use remote::{
    HttpTransport, RemoteBackend, RemoteRequest, RemoteResponse, SimulatedTransport,
    SyncingRemoteBackend, Transport,
};
pub use sink::{FileSink, KeyValueSink, MemorySink};
