//! Request configuration
//!
//! Replaces the loose `options` object of the web form with a named type.

use super::types::DocumentType;

/// Fully specified configuration of one chat request.
///
/// Defaults: `auto_create = false`, `filename = None`, `types = [Docx]`.
/// `filename` and `types` are ignored unless `auto_create` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Ask the backend to generate downloadable documents from the reply.
    pub auto_create: bool,
    /// Base name for generated files, without extension.
    pub filename: Option<String>,
    /// Formats to generate, in docx/xlsx/pptx order.
    pub types: Vec<DocumentType>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            auto_create: false,
            filename: None,
            types: vec![DocumentType::Docx],
        }
    }
}

impl RequestOptions {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn create(filename: impl Into<String>, types: Vec<DocumentType>) -> Self {
        Self {
            auto_create: true,
            filename: Some(filename.into()),
            types,
        }
    }
}
