// Config loading tests - testing AppConfig::load error handling
//
// Tests focused on configuration file loading, validation errors and
// environment overrides.

use docchat_client::config::{AppConfig, ConfigError};
use docchat_client::constants::{ENV_BASE_URL, ENV_SESSION_ID};
use docchat_client::DocumentType;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("docchat.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

fn clear_env() {
    // SAFETY: env-touching tests are serialized with #[serial].
    unsafe {
        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_SESSION_ID);
    }
}

#[test]
#[serial]
fn returns_error_when_file_not_found() {
    clear_env();
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/docchat.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
#[serial]
fn loads_full_config() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
base_url = "http://docs.internal:8080"
session_id = "abc-123"
default_filename = "invoice-maret"
default_types = ["xlsx", "docx"]
download_dir = "out/files"
timeout_secs = 30
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config loads");
    assert_eq!(config.base_url, "http://docs.internal:8080");
    assert_eq!(config.session_id.as_deref(), Some("abc-123"));
    assert_eq!(config.default_filename, "invoice-maret");
    assert_eq!(
        config.default_types,
        vec![DocumentType::Docx, DocumentType::Xlsx]
    );
    assert_eq!(config.download_dir, Some(PathBuf::from("out/files")));
    assert_eq!(config.timeout().map(|t| t.as_secs()), Some(30));
}

#[test]
#[serial]
fn missing_fields_fall_back_to_defaults() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "");

    let config = AppConfig::load(Some(&path)).expect("config loads");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.base_url, "http://127.0.0.1:5000");
    assert!(config.timeout().is_none());
}

#[test]
#[serial]
fn returns_error_on_invalid_toml() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "base_url = ");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
#[serial]
fn returns_error_on_unknown_field() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "model = \"llama3\"\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
#[serial]
fn returns_error_on_invalid_base_url() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "base_url = \"ftp://files.local\"\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}

#[test]
#[serial]
fn returns_error_on_unknown_document_type() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "default_types = [\"docx\", \"pdf\"]\n");

    match AppConfig::load(Some(&path)) {
        Err(ConfigError::UnknownDocumentType { value }) => assert_eq!(value, "pdf"),
        other => panic!("expected UnknownDocumentType, got {other:?}"),
    }
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        "base_url = \"http://from-file:5000\"\nsession_id = \"file-session\"\n",
    );

    // SAFETY: serialized with #[serial].
    unsafe {
        std::env::set_var(ENV_BASE_URL, "http://from-env:9000");
        std::env::set_var(ENV_SESSION_ID, "env-session");
    }
    let result = AppConfig::load(Some(&path));
    clear_env();

    let config = result.expect("config loads");
    assert_eq!(config.base_url, "http://from-env:9000");
    assert_eq!(config.session_id.as_deref(), Some("env-session"));
}

#[test]
#[serial]
fn config_round_trips_through_toml() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let original = AppConfig {
        base_url: "https://docs.example.com".into(),
        session_id: None,
        default_filename: "mou".into(),
        default_types: vec![DocumentType::Pptx],
        download_dir: None,
        timeout_secs: Some(12),
    };
    let raw = original.to_toml_string().expect("serialize");
    let path = write_config(dir.path(), &raw);

    let loaded = AppConfig::load(Some(&path)).expect("config loads");
    assert_eq!(loaded, original);
}
