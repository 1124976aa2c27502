use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use record_pipeline::core::config::{AppConfig, BackendKind};
use record_pipeline::errors::PersistError;

fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, PersistError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.backend, BackendKind::Local);
    assert_eq!(config.storage_key, "user");
    assert!(config.local_store_path.is_none());
    assert!(config.remote_endpoint.is_none());
    assert_eq!(config.remote_timeout, Duration::from_millis(5_000));
}

#[test]
fn test_reads_all_variables() {
    let config = config_from(&[
        ("STORAGE_BACKEND", "Remote"),
        ("STORAGE_KEY", "account"),
        ("LOCAL_STORE_PATH", "/tmp/store.json"),
        ("REMOTE_ENDPOINT", "http://localhost:8080/api/saveUser"),
        ("REMOTE_TIMEOUT_MS", "250"),
    ])
    .unwrap();

    assert_eq!(config.backend, BackendKind::Remote);
    assert_eq!(config.storage_key, "account");
    assert_eq!(config.local_store_path, Some(PathBuf::from("/tmp/store.json")));
    assert_eq!(
        config.remote_endpoint.as_ref().map(url::Url::as_str),
        Some("http://localhost:8080/api/saveUser")
    );
    assert_eq!(config.remote_timeout, Duration::from_millis(250));
}

#[test]
fn test_backend_names() {
    for (name, kind) in [
        ("local", BackendKind::Local),
        ("session", BackendKind::Session),
        ("api", BackendKind::Remote),
        ("faulty", BackendKind::Faulty),
    ] {
        assert_eq!(config_from(&[("STORAGE_BACKEND", name)]).unwrap().backend, kind);
    }
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = config_from(&[("STORAGE_BACKEND", "  "), ("STORAGE_KEY", "")]).unwrap();
    assert_eq!(config.backend, BackendKind::Local);
    assert_eq!(config.storage_key, "user");
}

#[test]
fn test_invalid_values_are_config_errors() {
    assert!(matches!(
        config_from(&[("STORAGE_BACKEND", "tape")]),
        Err(PersistError::ConfigError(_))
    ));
    assert!(matches!(
        config_from(&[("REMOTE_TIMEOUT_MS", "soon")]),
        Err(PersistError::ConfigError(_))
    ));
    assert!(matches!(
        config_from(&[("REMOTE_ENDPOINT", "::not a url::")]),
        Err(PersistError::ConfigError(_))
    ));
}
