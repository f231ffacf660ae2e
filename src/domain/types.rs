use serde::{Deserialize, Serialize};

/// Output document formats the backend can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Docx,
    Xlsx,
    Pptx,
}

impl DocumentType {
    /// Checkbox order of the form.
    pub const ALL: [DocumentType; 3] = [DocumentType::Docx, DocumentType::Xlsx, DocumentType::Pptx];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Docx => "docx",
            DocumentType::Xlsx => "xlsx",
            DocumentType::Pptx => "pptx",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "docx" => Some(DocumentType::Docx),
            "xlsx" => Some(DocumentType::Xlsx),
            "pptx" => Some(DocumentType::Pptx),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/chat`.
///
/// `filename` and `types` only go on the wire for auto-create requests;
/// [`ChatRequest::from_options`] enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub auto_create: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<DocumentType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_id: Option<i64>,
}

impl ChatRequest {
    pub fn plain(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            auto_create: false,
            filename: None,
            types: None,
            history_id: None,
        }
    }

    pub fn from_options(message: impl Into<String>, options: &super::RequestOptions) -> Self {
        let mut request = Self::plain(message);
        request.auto_create = options.auto_create;
        if options.auto_create {
            request.filename = options
                .filename
                .as_ref()
                .filter(|name| !name.is_empty())
                .cloned();
            if !options.types.is_empty() {
                request.types = Some(options.types.clone());
            }
        }
        request
    }

    pub fn with_history_id(mut self, history_id: Option<i64>) -> Self {
        self.history_id = history_id;
        self
    }
}

/// A file the backend generated for an auto-create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub filename: String,
    pub url: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Response body of `POST /api/chat`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<GeneratedFile>>,
    #[serde(default)]
    pub history_id: Option<i64>,
}

impl ChatReply {
    /// The application error, if the backend reported a non-empty one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref().filter(|d| !d.is_empty())
    }

    pub fn files(&self) -> &[GeneratedFile] {
        self.files.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestOptions;
    use serde_json::json;

    #[test]
    fn plain_request_omits_create_fields() {
        let value = serde_json::to_value(ChatRequest::plain("halo")).unwrap();
        assert_eq!(value, json!({ "message": "halo", "auto_create": false }));
    }

    #[test]
    fn create_request_carries_filename_and_types() {
        let options = RequestOptions::create("laporan", vec![DocumentType::Docx, DocumentType::Pptx]);
        let value = serde_json::to_value(ChatRequest::from_options("buat", &options)).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "buat",
                "auto_create": true,
                "filename": "laporan",
                "types": ["docx", "pptx"]
            })
        );
    }

    #[test]
    fn create_fields_dropped_when_auto_create_is_off() {
        let options = RequestOptions {
            auto_create: false,
            filename: Some("ignored".into()),
            types: vec![DocumentType::Xlsx],
        };
        let request = ChatRequest::from_options("x", &options);
        assert!(request.filename.is_none());
        assert!(request.types.is_none());
    }

    #[test]
    fn reply_tolerates_missing_and_unknown_fields() {
        let reply: ChatReply =
            serde_json::from_value(json!({ "text": "ok", "step": "idle" })).unwrap();
        assert_eq!(reply.text.as_deref(), Some("ok"));
        assert!(reply.files().is_empty());
        assert!(reply.error().is_none());
    }

    #[test]
    fn reply_reads_file_type_and_null_history() {
        let reply: ChatReply = serde_json::from_value(json!({
            "files": [{ "type": "pdf", "filename": "inv.pdf", "url": "/download/inv.pdf" }],
            "history_id": null
        }))
        .unwrap();
        assert_eq!(reply.files()[0].kind.as_deref(), Some("pdf"));
        assert!(reply.history_id.is_none());
    }

    #[test]
    fn document_type_parsing_is_case_insensitive() {
        assert_eq!(DocumentType::from_str(" XLSX "), Some(DocumentType::Xlsx));
        assert_eq!(DocumentType::from_str("pdf"), None);
    }
}
