pub mod history;
pub mod options;
pub mod types;
pub mod validation;

pub use history::{DocumentEntry, HistoryDetail, HistoryMessage, HistorySummary};
pub use options::RequestOptions;
pub use types::{ChatReply, ChatRequest, DocumentType, GeneratedFile};
pub use validation::{DEFAULT_FILENAME, ValidationError};
