//! Base HTTP client with shared logic

use super::error::ClientError;
use reqwest::{Client, Url};
use std::time::Duration;

/// Base HTTP client shared by the chat transport and the downloader
#[derive(Debug, Clone)]
pub struct HttpClientBase {
    pub base_url: Url,
    pub http: Client,
}

impl HttpClientBase {
    /// Parses `base_url` and builds a client. `timeout = None` keeps the
    /// reqwest default, which never times out.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::network)?;
        Ok(Self { base_url, http })
    }

    /// Resolve a path or link the way a browser resolves it against the
    /// page origin: absolute paths replace the base path, absolute urls
    /// are used as-is.
    pub fn resolve(&self, link: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(link)
            .map_err(|e| ClientError::invalid_url(link, e))
    }
}

/// Accepts only http(s) urls.
pub fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw.trim()).map_err(|e| ClientError::invalid_url(raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::invalid_url(
            raw,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> HttpClientBase {
        HttpClientBase::new(url, None).unwrap()
    }

    #[test]
    fn resolves_absolute_path_against_origin() {
        let client = base("http://localhost:5000/app/");
        let url = client.resolve("/download/a.docx").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/download/a.docx");
    }

    #[test]
    fn keeps_absolute_links() {
        let client = base("http://localhost:5000");
        let url = client.resolve("https://cdn.example.com/f/b.xlsx").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/f/b.xlsx");
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(matches!(
            parse_base_url("ftp://files.example.com"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(parse_base_url("not a url").is_err());
    }
}
