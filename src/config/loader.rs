use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_BASE_URL, ENV_PATH, ENV_SESSION_ID};
use crate::domain::DocumentType;
use crate::infrastructure::http::parse_base_url;
use crate::infrastructure::download::expand_dir;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub base_url: Option<String>,
    pub session_id: Option<String>,
    pub default_filename: Option<String>,
    pub default_types: Option<Vec<String>>,
    pub download_dir: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one, `config/docchat.toml` is read
/// when present and defaults are used otherwise. Environment overrides are
/// applied last.
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    let raw = match path {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)?
            } else {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                RawConfig::default()
            }
        }
    };
    let raw = apply_env_overrides(raw);
    validate_and_build(raw)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides(mut raw: RawConfig) -> RawConfig {
    if let Some(url) = env_value(ENV_BASE_URL) {
        debug!(url = %url, "Base url taken from environment");
        raw.base_url = Some(url);
    }
    if let Some(session) = env_value(ENV_SESSION_ID) {
        raw.session_id = Some(session);
    }
    raw
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(super) fn validate_and_build(raw: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let defaults = super::AppConfig::default();

    let base_url = raw.base_url.unwrap_or(defaults.base_url);
    parse_base_url(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.clone(),
        reason: e.to_string(),
    })?;

    let default_types = match raw.default_types {
        Some(values) => {
            let mut types = Vec::new();
            for value in values {
                let doc_type = DocumentType::from_str(&value)
                    .ok_or(ConfigError::UnknownDocumentType { value })?;
                if !types.contains(&doc_type) {
                    types.push(doc_type);
                }
            }
            types.sort();
            types
        }
        None => defaults.default_types,
    };

    if raw.timeout_secs == Some(0) {
        return Err(ConfigError::ZeroTimeout);
    }

    Ok(super::AppConfig {
        base_url,
        session_id: raw.session_id.filter(|s| !s.trim().is_empty()),
        default_filename: raw
            .default_filename
            .map(|f| f.trim().to_string())
            .unwrap_or(defaults.default_filename),
        default_types,
        download_dir: raw.download_dir.as_deref().map(expand_dir),
        timeout_secs: raw.timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_raw_config_yields_defaults() {
        let config = validate_and_build(RawConfig::default()).unwrap();
        assert_eq!(config, super::super::AppConfig::default());
    }

    #[test]
    fn default_types_are_deduplicated_and_ordered() {
        let raw = RawConfig {
            default_types: Some(vec!["pptx".into(), "DOCX".into(), "pptx".into()]),
            ..Default::default()
        };
        let config = validate_and_build(raw).unwrap();
        assert_eq!(
            config.default_types,
            vec![DocumentType::Docx, DocumentType::Pptx]
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let raw = RawConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            validate_and_build(raw),
            Err(ConfigError::ZeroTimeout)
        ));
    }
}
