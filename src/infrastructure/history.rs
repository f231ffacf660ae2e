//! Saved conversations and generated documents
//!
//! Unlike chat, these endpoints fail through the HTTP status with an
//! `{ "error": "..." }` body, which becomes [`ClientError::Api`].

use super::error::ClientError;
use super::http::HttpClientBase;
use crate::constants::{DOCUMENTS_PATH, HISTORY_PATH};
use crate::domain::{DocumentEntry, HistoryDetail, HistorySummary};
use reqwest::{RequestBuilder, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Deserialize)]
struct Items<T> {
    items: Vec<T>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize)]
struct TitleUpdate<'a> {
    title: &'a str,
}

/// Client for `/api/history` and `/api/documents`
#[derive(Debug, Clone)]
pub struct HistoryApi {
    base: HttpClientBase,
}

impl HistoryApi {
    pub fn new(base: HttpClientBase) -> Self {
        Self { base }
    }

    /// Saved conversations, newest first. A blank `query` lists everything;
    /// otherwise the backend matches it against titles.
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<HistorySummary>, ClientError> {
        let url = self.search_url(HISTORY_PATH, query)?;
        info!(url = %url, "Listing chat histories");
        let items: Items<HistorySummary> = send_json(self.base.http.get(url)).await?;
        Ok(items.items)
    }

    pub async fn get(&self, id: i64) -> Result<HistoryDetail, ClientError> {
        let url = self.entry_url(id)?;
        info!(id, "Fetching chat history");
        send_json(self.base.http.get(url)).await
    }

    pub async fn rename(&self, id: i64, title: &str) -> Result<(), ClientError> {
        let url = self.entry_url(id)?;
        info!(id, "Renaming chat history");
        let request = self.base.http.put(url).json(&TitleUpdate {
            title: title.trim(),
        });
        let _: IgnoredAny = send_json(request).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let url = self.entry_url(id)?;
        info!(id, "Deleting chat history");
        let _: IgnoredAny = send_json(self.base.http.delete(url)).await?;
        Ok(())
    }

    /// Files generated in any saved conversation, newest first. `query`
    /// matches history title, filename and task type.
    pub async fn documents(&self, query: Option<&str>) -> Result<Vec<DocumentEntry>, ClientError> {
        let url = self.search_url(DOCUMENTS_PATH, query)?;
        info!(url = %url, "Listing generated documents");
        let items: Items<DocumentEntry> = send_json(self.base.http.get(url)).await?;
        Ok(items.items)
    }

    fn entry_url(&self, id: i64) -> Result<Url, ClientError> {
        self.base.resolve(&format!("{HISTORY_PATH}/{id}"))
    }

    fn search_url(&self, path: &str, query: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base.resolve(path)?;
        if let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair("q", query);
        }
        Ok(url)
    }
}

async fn send_json<R: DeserializeOwned>(request: RequestBuilder) -> Result<R, ClientError> {
    let response = request.send().await.map_err(ClientError::network)?;
    let status = response.status();
    let body = response.text().await.map_err(ClientError::network)?;
    debug!(status = status.as_u16(), bytes = body.len(), "Received history response");

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|source| ClientError::Decode {
        status: status.as_u16(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HistoryApi {
        HistoryApi::new(HttpClientBase::new("http://localhost:5000", None).unwrap())
    }

    #[test]
    fn blank_query_is_not_sent() {
        let url = api().search_url(HISTORY_PATH, Some("   ")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/history");
    }

    #[test]
    fn query_is_encoded() {
        let url = api().search_url(DOCUMENTS_PATH, Some(" pt maju&co ")).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/documents?q=pt+maju%26co"
        );
    }

    #[test]
    fn entry_url_appends_id() {
        let url = api().entry_url(12).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/history/12");
    }
}
