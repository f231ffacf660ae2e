//! Client-side validation
//!
//! Validation failures are returned instead of shown, so each front-end
//! decides how to present them.

use super::types::DocumentType;
use thiserror::Error;

/// Filename used when the filename field is blank.
pub const DEFAULT_FILENAME: &str = "document";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Ketik prompt dulu.")]
    EmptyPrompt,
    #[error("Pilih minimal satu tipe file (DOCX/XLSX/PPTX).")]
    NoDocumentType,
}

/// Trims the prompt and rejects it if nothing is left.
pub fn validate_prompt(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyPrompt);
    }
    Ok(trimmed)
}

/// Requires at least one selected type.
pub fn validate_types(types: &[DocumentType]) -> Result<(), ValidationError> {
    if types.is_empty() {
        return Err(ValidationError::NoDocumentType);
    }
    Ok(())
}

/// Blank filename falls back to [`DEFAULT_FILENAME`]; the result is trimmed.
pub fn resolve_filename(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}
