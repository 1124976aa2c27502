//! Application layer: the save workflow.

pub mod service;

pub use service::PersistenceService;
