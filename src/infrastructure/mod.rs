//! HTTP infrastructure
//!
//! # Structure
//! - `http` - shared reqwest client and url resolution
//! - `transport` - `ChatTransport` trait and its HTTP implementation
//! - `download` - saving generated files locally
//! - `history` - saved conversations and generated documents
//! - `error` - transport and download errors

pub mod download;
pub mod error;
pub mod history;
pub mod http;
pub mod transport;

pub use download::Downloader;
pub use error::{ClientError, DownloadError};
pub use history::HistoryApi;
pub use http::HttpClientBase;
pub use transport::{ChatTransport, HttpTransport};
