//! Application constants
//!
//! Single source of truth for paths, endpoints and fixed UI strings.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/docchat.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Backend address used when neither config, env nor CLI name one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Chat endpoint, resolved against the base url
pub const CHAT_PATH: &str = "/api/chat";

/// Saved conversations: list, and `/<id>` for detail, rename and delete
pub const HISTORY_PATH: &str = "/api/history";

/// Files generated across all saved conversations
pub const DOCUMENTS_PATH: &str = "/api/documents";

/// Header the backend keys its conversation state on
pub const SESSION_HEADER: &str = "X-Session-ID";

/// Shown in the output area while a request is in flight
pub const THINKING_PLACEHOLDER: &str = "Thinking...";

/// Link target for generated files
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Environment override for the backend address
pub const ENV_BASE_URL: &str = "DOCCHAT_BASE_URL";

/// Environment override for the session id
pub const ENV_SESSION_ID: &str = "DOCCHAT_SESSION_ID";
