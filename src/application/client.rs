use super::view::{ChatForm, ChatView};
use crate::domain::validation::{resolve_filename, validate_prompt, validate_types};
use crate::domain::{ChatReply, ChatRequest, RequestOptions, ValidationError};
use crate::infrastructure::{ChatTransport, ClientError};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Fixed `X-Session-ID`; a random one is generated when unset.
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_id(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id.filter(|s| !s.trim().is_empty());
        self
    }
}

#[derive(Debug)]
struct SessionState {
    session_id: String,
    history_id: Option<i64>,
}

/// Chat client for the document-generator backend.
///
/// `send_plain` and `send_create` are the two form actions. Front-ends that
/// let requests overlap use `prepare_*` + `dispatch` and apply each outcome
/// to the view as it completes.
pub struct ChatClient<T: ChatTransport> {
    transport: T,
    session: Mutex<SessionState>,
}

impl<T: ChatTransport> ChatClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        let session_id = config
            .session_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        debug!(session_id = %session_id, "Chat client created");
        Self {
            transport,
            session: Mutex::new(SessionState {
                session_id,
                history_id: None,
            }),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn session_id(&self) -> String {
        self.session().session_id.clone()
    }

    pub fn history_id(&self) -> Option<i64> {
        self.session().history_id
    }

    /// Start a new backend conversation: new session id, no history entry.
    pub fn reset_session(&self) -> String {
        let mut session = self.session();
        session.session_id = Uuid::new_v4().to_string();
        session.history_id = None;
        info!(session_id = %session.session_id, "Session reset");
        session.session_id.clone()
    }

    /// Continue a saved conversation: later requests append to `history_id`.
    pub fn resume_history(&self, history_id: i64) {
        self.session().history_id = Some(history_id);
        info!(history_id, "Resuming saved conversation");
    }

    /// Stop appending to `history_id` if it is the conversation in use.
    pub fn forget_history(&self, history_id: i64) -> bool {
        let mut session = self.session();
        if session.history_id == Some(history_id) {
            session.history_id = None;
            true
        } else {
            false
        }
    }

    /// Build the request behind the plain send button.
    pub fn prepare_plain(&self, form: &ChatForm) -> Result<ChatRequest, ValidationError> {
        let prompt = validate_prompt(&form.text_input)?;
        Ok(self.request(prompt, &RequestOptions::plain()))
    }

    /// Build the request behind the send-and-create button.
    pub fn prepare_create(&self, form: &ChatForm) -> Result<ChatRequest, ValidationError> {
        let prompt = validate_prompt(&form.text_input)?;
        let filename = resolve_filename(&form.filename);
        let types = form.selected_types();
        validate_types(&types)?;
        Ok(self.request(prompt, &RequestOptions::create(filename, types)))
    }

    /// Build a request from explicit options, attaching the tracked history id.
    pub fn request(&self, prompt: &str, options: &RequestOptions) -> ChatRequest {
        ChatRequest::from_options(prompt, options).with_history_id(self.history_id())
    }

    /// Send one request under the current session.
    pub async fn dispatch(&self, request: ChatRequest) -> Result<ChatReply, ClientError> {
        let session_id = self.session_id();
        self.dispatch_in_session(&session_id, request).await
    }

    /// Send one request under `session_id` and record the history id the
    /// backend returns, unless the session was reset while it was in flight.
    pub async fn dispatch_in_session(
        &self,
        session_id: &str,
        request: ChatRequest,
    ) -> Result<ChatReply, ClientError> {
        let result = self.transport.post_chat(&request, session_id).await;
        match &result {
            Ok(reply) => {
                if let Some(history_id) = reply.history_id {
                    self.record_history(session_id, history_id);
                }
                if let Some(error) = reply.error() {
                    warn!(error, "Backend reported an error");
                } else {
                    debug!(files = reply.files().len(), "Chat reply received");
                }
            }
            Err(err) => warn!(error = %err, "Chat request failed"),
        }
        result
    }

    fn record_history(&self, session_id: &str, history_id: i64) {
        let mut session = self.session();
        if session.session_id == session_id {
            session.history_id = Some(history_id);
        } else {
            debug!(history_id, "Ignoring history id from a previous session");
        }
    }

    pub async fn send_plain(
        &self,
        form: &ChatForm,
        view: &mut ChatView,
    ) -> Result<(), ValidationError> {
        let request = self.prepare_plain(form)?;
        self.send(request, view).await;
        Ok(())
    }

    pub async fn send_create(
        &self,
        form: &ChatForm,
        view: &mut ChatView,
    ) -> Result<(), ValidationError> {
        let request = self.prepare_create(form)?;
        self.send(request, view).await;
        Ok(())
    }

    /// Placeholder, request, render.
    pub async fn send(&self, request: ChatRequest, view: &mut ChatView) {
        view.begin();
        let outcome = self.dispatch(request).await;
        view.apply(outcome);
    }

    fn session(&self) -> MutexGuard<'_, SessionState> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
