//! Saving generated files to disk

use super::error::{ClientError, DownloadError};
use super::http::HttpClientBase;
use crate::application::view::DownloadLink;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name used when a link's filename has no usable final component.
const FALLBACK_NAME: &str = "download";

/// Fetches download links into a local directory
#[derive(Debug, Clone)]
pub struct Downloader {
    base: HttpClientBase,
}

impl Downloader {
    pub fn new(base: HttpClientBase) -> Self {
        Self { base }
    }

    /// Download `link` into `dir`, creating the directory if needed.
    /// Returns the path written.
    pub async fn fetch(&self, link: &DownloadLink, dir: &Path) -> Result<PathBuf, DownloadError> {
        let url = self.base.resolve(&link.href)?;
        info!(url = %url, "Downloading generated file");

        let response = self
            .base
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(ClientError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await.map_err(ClientError::network)?;

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| DownloadError::Io {
                path: dir.to_path_buf(),
                source,
            })?;

        let path = dir.join(safe_file_name(&link.filename));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| DownloadError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = bytes.len(), "Saved generated file");
        Ok(path)
    }
}

/// Keeps only the final path component so a server-supplied name cannot
/// escape the target directory.
pub fn safe_file_name(name: &str) -> String {
    let normalized = name.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "..")
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

/// Expand `~` and environment variables in a user-supplied directory.
pub fn expand_dir(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directories_from_names() {
        assert_eq!(safe_file_name("../../etc/passwd"), "passwd");
        assert_eq!(safe_file_name("sub\\dir\\a.docx"), "a.docx");
        assert_eq!(safe_file_name("invoice.pdf"), "invoice.pdf");
    }

    #[test]
    fn falls_back_for_unusable_names() {
        assert_eq!(safe_file_name(""), "download");
        assert_eq!(safe_file_name(".."), "download");
        assert_eq!(safe_file_name("/"), "download");
    }

    #[test]
    fn plain_dirs_are_unchanged() {
        assert_eq!(expand_dir("out/files"), PathBuf::from("out/files"));
    }
}
