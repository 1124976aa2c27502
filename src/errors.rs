use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Record failed validation")]
    InvalidRecord,

    #[error("Storage backend reported a failure: {0}")]
    StorageFailure(String),

    #[error("Failed to access key-value sink: {0}")]
    SinkError(String),

    #[error("Failed to reach remote storage: {0}")]
    TransportError(String),

    #[error("Failed to serialize record: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for PersistError {
    fn from(error: std::io::Error) -> Self {
        PersistError::SinkError(error.to_string())
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(error: serde_json::Error) -> Self {
        PersistError::SerializationError(error.to_string())
    }
}

impl From<reqwest::Error> for PersistError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            PersistError::TransportError(format!("request timed out: {error}"))
        } else {
            PersistError::TransportError(error.to_string())
        }
    }
}

impl From<url::ParseError> for PersistError {
    fn from(error: url::ParseError) -> Self {
        PersistError::ConfigError(format!("invalid endpoint URL: {error}"))
    }
}
