//! Saved conversations and the documents generated in them

use super::types::GeneratedFile;
use serde::{Deserialize, Serialize};

/// One row of `GET /api/history`, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One exchange stored in a history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMessage {
    #[serde(default)]
    pub id: Option<String>,
    /// `"user"` or `"assistant"`
    pub sender: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HistoryMessage {
    pub fn is_user(&self) -> bool {
        self.sender.eq_ignore_ascii_case("user")
    }
}

/// Full entry from `GET /api/history/<id>`.
///
/// `data` and `state` are the backend's flow state and stay untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDetail {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
    #[serde(default)]
    pub messages: Vec<HistoryMessage>,
    #[serde(default)]
    pub state: serde_json::Value,
}

/// One file row of `GET /api/documents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub history_id: i64,
    #[serde(default)]
    pub history_title: Option<String>,
    #[serde(default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub filename: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl DocumentEntry {
    /// The entry as a downloadable file, when the backend kept its url.
    pub fn as_file(&self) -> Option<GeneratedFile> {
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;
        Some(GeneratedFile {
            filename: self.filename.clone(),
            url: url.to_string(),
            kind: self.kind.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_tolerates_null_title_and_missing_state() {
        let detail: HistoryDetail = serde_json::from_value(json!({
            "id": 3,
            "title": null,
            "task_type": "invoice",
            "messages": [
                { "sender": "user", "text": "buat invoice" },
                { "sender": "assistant", "text": "Siap", "files": [] }
            ]
        }))
        .unwrap();

        assert_eq!(detail.title, None);
        assert!(detail.messages[0].is_user());
        assert!(!detail.messages[1].is_user());
        assert!(detail.state.is_null());
    }

    #[test]
    fn document_without_url_is_not_downloadable() {
        let entry: DocumentEntry = serde_json::from_value(json!({
            "history_id": 1,
            "filename": "inv.docx",
            "type": "docx",
            "url": null
        }))
        .unwrap();
        assert!(entry.as_file().is_none());

        let entry = DocumentEntry {
            url: Some("/download/inv.docx".into()),
            ..entry
        };
        let file = entry.as_file().unwrap();
        assert_eq!(file.url, "/download/inv.docx");
        assert_eq!(file.kind.as_deref(), Some("docx"));
    }
}
