use super::error::ConfigError;
use crate::constants::DEFAULT_BASE_URL;
use crate::domain::{DEFAULT_FILENAME, DocumentType};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration loaded from docchat.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin; `/api/chat` and download links resolve against it
    pub base_url: String,
    /// Fixed `X-Session-ID`; generated per run when unset
    pub session_id: Option<String>,
    /// Prefills the filename field
    pub default_filename: String,
    /// Types ticked at startup
    pub default_types: Vec<DocumentType>,
    /// Where `/download` saves files; current directory when unset
    pub download_dir: Option<PathBuf>,
    /// Request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_id: None,
            default_filename: DEFAULT_FILENAME.to_string(),
            default_types: vec![DocumentType::Docx],
            download_dir: None,
            timeout_secs: None,
        }
    }
}

#[derive(Serialize)]
struct RawOut<'a> {
    base_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
    default_filename: &'a str,
    default_types: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    download_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Convert configuration to TOML string
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let raw = RawOut {
            base_url: &self.base_url,
            session_id: self.session_id.as_deref(),
            default_filename: &self.default_filename,
            default_types: self.default_types.iter().map(|t| t.as_str()).collect(),
            download_dir: self
                .download_dir
                .as_ref()
                .map(|d| d.display().to_string()),
            timeout_secs: self.timeout_secs,
        };
        toml::to_string(&raw)
    }
}
