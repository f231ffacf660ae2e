//! Chat transport
//!
//! One `POST /api/chat` per call. The HTTP status is logged but never
//! decides the outcome: any JSON body is a reply, anything else is a
//! [`ClientError`].

use super::error::ClientError;
use super::http::HttpClientBase;
use crate::constants::{CHAT_PATH, SESSION_HEADER};
use crate::domain::{ChatReply, ChatRequest};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Sends a chat request and returns the decoded reply
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_chat(
        &self,
        request: &ChatRequest,
        session_id: &str,
    ) -> Result<ChatReply, ClientError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base: HttpClientBase,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        Ok(Self {
            base: HttpClientBase::new(base_url, timeout)?,
        })
    }

    pub fn from_base(base: HttpClientBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &HttpClientBase {
        &self.base
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_chat(
        &self,
        request: &ChatRequest,
        session_id: &str,
    ) -> Result<ChatReply, ClientError> {
        let url = self.base.resolve(CHAT_PATH)?;

        info!(
            url = %url,
            auto_create = request.auto_create,
            types = request.types.as_ref().map(|t| t.len()).unwrap_or(0),
            "Sending chat request"
        );

        let response = self
            .base
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header(SESSION_HEADER, session_id)
            .json(request)
            .send()
            .await
            .map_err(ClientError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::network)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received chat response");

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            status: status.as_u16(),
            source,
        })
    }
}
