use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::errors::PersistError;

pub const DEFAULT_STORAGE_KEY: &str = "user";
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;

/// Which storage backend the demo driver wires into the service.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum BackendKind {
    #[default]
    Local,
    Session,
    Remote,
    Faulty,
}

impl FromStr for BackendKind {
    type Err = PersistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(BackendKind::Local),
            "session" => Ok(BackendKind::Session),
            "remote" | "api" => Ok(BackendKind::Remote),
            "faulty" => Ok(BackendKind::Faulty),
            other => Err(PersistError::ConfigError(format!(
                "STORAGE_BACKEND: unknown backend '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub storage_key: String,
    pub local_store_path: Option<PathBuf>,
    pub remote_endpoint: Option<Url>,
    pub remote_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            local_store_path: None,
            remote_endpoint: None,
            remote_timeout: Duration::from_millis(DEFAULT_REMOTE_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `PersistError::ConfigError` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, PersistError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::ConfigError` for an unknown backend, a
    /// non-numeric timeout, or an unparseable endpoint URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PersistError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        let remote_endpoint = get("REMOTE_ENDPOINT")
            .map(|raw| Url::parse(raw.trim()))
            .transpose()?;

        let remote_timeout = match get("REMOTE_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(raw.trim().parse().map_err(|e| {
                PersistError::ConfigError(format!("REMOTE_TIMEOUT_MS: {e}"))
            })?),
            None => defaults.remote_timeout,
        };

        Ok(Self {
            backend,
            storage_key: get("STORAGE_KEY").unwrap_or(defaults.storage_key),
            local_store_path: get("LOCAL_STORE_PATH").map(PathBuf::from),
            remote_endpoint,
            remote_timeout,
        })
    }
}
