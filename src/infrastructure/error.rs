//! Transport and download errors

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a JSON reply from the backend.
///
/// Chat application errors are not represented here; they arrive as a
/// successful [`crate::domain::ChatReply`]. The history endpoints report
/// theirs through the status code as [`ClientError::Api`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("response (HTTP {status}) is not valid JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Short message in Indonesian for status lines.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidUrl { url, .. } => format!("URL server '{url}' tidak valid."),
            ClientError::Network { source } => {
                if source.is_connect() {
                    "Tidak dapat terhubung ke server.".to_string()
                } else if source.is_timeout() {
                    "Permintaan ke server melebihi batas waktu.".to_string()
                } else {
                    "Kesalahan jaringan saat menghubungi server.".to_string()
                }
            }
            ClientError::Decode { status, .. } => {
                format!("Respons server (HTTP {status}) tidak valid.")
            }
            ClientError::Api { message, .. } => format!("Server: {message}"),
        }
    }
}

/// Failure to save a generated file locally.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("download of {url} failed with HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    pub fn user_message(&self) -> String {
        match self {
            DownloadError::Client(err) => err.user_message(),
            DownloadError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                "File tidak ditemukan di server.".to_string()
            }
            DownloadError::Status { status, .. } => {
                format!("Unduhan gagal: {}", status.as_u16())
            }
            DownloadError::Io { path, .. } => {
                format!("Gagal menyimpan file ke {}.", path.display())
            }
        }
    }
}
