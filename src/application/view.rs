//! View-model for the chat form
//!
//! [`ChatForm`] holds what the user typed and ticked, [`ChatView`] holds what
//! is shown back. Both are built once by the front-end and handed to the
//! client per action.

use super::history::{documents_list, transcript};
use crate::constants::{NEW_CONTEXT_TARGET, THINKING_PLACEHOLDER};
use crate::domain::{ChatReply, DocumentEntry, DocumentType, GeneratedFile, HistoryDetail};
use crate::infrastructure::ClientError;

/// User inputs: prompt, filename and the three type checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatForm {
    pub text_input: String,
    pub filename: String,
    pub opt_docx: bool,
    pub opt_xlsx: bool,
    pub opt_pptx: bool,
}

impl ChatForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_input = text.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_types(mut self, types: &[DocumentType]) -> Self {
        for doc_type in DocumentType::ALL {
            self.set_type(doc_type, types.contains(&doc_type));
        }
        self
    }

    pub fn is_selected(&self, doc_type: DocumentType) -> bool {
        match doc_type {
            DocumentType::Docx => self.opt_docx,
            DocumentType::Xlsx => self.opt_xlsx,
            DocumentType::Pptx => self.opt_pptx,
        }
    }

    pub fn set_type(&mut self, doc_type: DocumentType, checked: bool) {
        match doc_type {
            DocumentType::Docx => self.opt_docx = checked,
            DocumentType::Xlsx => self.opt_xlsx = checked,
            DocumentType::Pptx => self.opt_pptx = checked,
        }
    }

    /// Flip a checkbox and return its new state
    pub fn toggle_type(&mut self, doc_type: DocumentType) -> bool {
        let checked = !self.is_selected(doc_type);
        self.set_type(doc_type, checked);
        checked
    }

    /// Checked types in docx, xlsx, pptx order
    pub fn selected_types(&self) -> Vec<DocumentType> {
        DocumentType::ALL
            .into_iter()
            .filter(|t| self.is_selected(*t))
            .collect()
    }
}

/// A rendered download link for one generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Visible text, `"Download <filename>"`
    pub text: String,
    pub href: String,
    pub filename: String,
    /// Always opens in a new browsing context
    pub target: &'static str,
}

impl From<&GeneratedFile> for DownloadLink {
    fn from(file: &GeneratedFile) -> Self {
        Self {
            text: format!("Download {}", file.filename),
            href: file.url.clone(),
            filename: file.filename.clone(),
            target: NEW_CONTEXT_TARGET,
        }
    }
}

/// What the output area currently shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewStatus {
    #[default]
    Idle,
    Pending,
    Replied,
    AppError,
    FetchError,
    /// A saved conversation or the document list
    Browsing,
}

/// Output area and file links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatView {
    pub chat_box: String,
    pub file_links: Vec<DownloadLink>,
    pub status: ViewStatus,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called right before a request goes out.
    pub fn begin(&mut self) {
        self.chat_box = THINKING_PLACEHOLDER.to_string();
        self.file_links.clear();
        self.status = ViewStatus::Pending;
    }

    /// Render the outcome of one exchange.
    pub fn apply(&mut self, outcome: Result<ChatReply, ClientError>) {
        match outcome {
            Ok(reply) => self.render_reply(&reply),
            Err(err) => self.render_failure(&err),
        }
    }

    pub fn render_reply(&mut self, reply: &ChatReply) {
        self.file_links.clear();

        if let Some(error) = reply.error() {
            self.chat_box = match reply.detail() {
                Some(detail) => format!("Error: {error}\n{detail}"),
                None => format!("Error: {error}"),
            };
            self.status = ViewStatus::AppError;
            return;
        }

        self.chat_box = reply.text.clone().unwrap_or_default();
        self.file_links = reply.files().iter().map(DownloadLink::from).collect();
        self.status = ViewStatus::Replied;
    }

    pub fn render_failure(&mut self, err: &ClientError) {
        self.chat_box = format!("Fetch error: {err}");
        self.file_links.clear();
        self.status = ViewStatus::FetchError;
    }

    /// Show a saved conversation and the files generated in it.
    pub fn show_history(&mut self, detail: &HistoryDetail) {
        self.chat_box = transcript(detail);
        self.file_links = detail.files.iter().map(DownloadLink::from).collect();
        self.status = ViewStatus::Browsing;
    }

    /// Show the document list; entries with a url become download links.
    pub fn show_documents(&mut self, entries: &[DocumentEntry]) {
        self.chat_box = documents_list(entries);
        self.file_links = entries
            .iter()
            .filter_map(DocumentEntry::as_file)
            .map(|file| DownloadLink::from(&file))
            .collect();
        self.status = ViewStatus::Browsing;
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, ViewStatus::AppError | ViewStatus::FetchError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(value: serde_json::Value) -> ChatReply {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_reply_replaces_output() {
        let mut view = ChatView::new();
        view.begin();
        assert_eq!(view.chat_box, "Thinking...");

        view.render_reply(&reply(json!({ "text": "Hello" })));
        assert_eq!(view.chat_box, "Hello");
        assert_eq!(view.status, ViewStatus::Replied);
        assert!(view.file_links.is_empty());
    }

    #[test]
    fn error_with_detail_uses_newline() {
        let mut view = ChatView::new();
        view.render_reply(&reply(json!({ "error": "Bad", "detail": "why" })));
        assert_eq!(view.chat_box, "Error: Bad\nwhy");
        assert!(view.is_failure());
    }

    #[test]
    fn error_without_detail_has_no_newline() {
        let mut view = ChatView::new();
        view.render_reply(&reply(json!({ "error": "Pesan kosong", "detail": "" })));
        assert_eq!(view.chat_box, "Error: Pesan kosong");
    }

    #[test]
    fn empty_error_string_is_not_an_error() {
        let mut view = ChatView::new();
        view.render_reply(&reply(json!({ "error": "", "text": "ok" })));
        assert_eq!(view.chat_box, "ok");
        assert_eq!(view.status, ViewStatus::Replied);
    }

    #[test]
    fn error_reply_renders_no_links() {
        let mut view = ChatView::new();
        view.render_reply(&reply(json!({
            "error": "Bad",
            "files": [{ "filename": "a.docx", "url": "/f/a.docx" }]
        })));
        assert!(view.file_links.is_empty());
    }

    #[test]
    fn files_become_links() {
        let mut view = ChatView::new();
        view.render_reply(&reply(json!({
            "files": [{ "filename": "a.docx", "url": "/f/a.docx" }]
        })));

        assert_eq!(view.file_links.len(), 1);
        let link = &view.file_links[0];
        assert_eq!(link.text, "Download a.docx");
        assert_eq!(link.href, "/f/a.docx");
        assert_eq!(link.target, "_blank");
    }

    #[test]
    fn begin_clears_previous_links() {
        let mut view = ChatView::new();
        view.render_reply(&reply(json!({
            "text": "done",
            "files": [{ "filename": "a.docx", "url": "/f/a.docx" }]
        })));
        view.begin();
        assert!(view.file_links.is_empty());
        assert_eq!(view.status, ViewStatus::Pending);
    }

    #[test]
    fn form_selection_keeps_checkbox_order() {
        let mut form = ChatForm::new();
        form.opt_pptx = true;
        form.opt_docx = true;
        assert_eq!(
            form.selected_types(),
            vec![DocumentType::Docx, DocumentType::Pptx]
        );
        assert!(!form.toggle_type(DocumentType::Docx));
        assert_eq!(form.selected_types(), vec![DocumentType::Pptx]);
    }

    #[test]
    fn document_list_links_only_downloadable_entries() {
        let entries: Vec<DocumentEntry> = serde_json::from_value(json!([
            { "history_id": 4, "history_title": "Quotation", "filename": "q.pdf", "url": "/download/q.pdf" },
            { "history_id": 3, "filename": "old.docx" }
        ]))
        .unwrap();
        let mut view = ChatView::new();
        view.begin();

        view.show_documents(&entries);

        assert_eq!(view.status, ViewStatus::Browsing);
        assert_eq!(view.file_links.len(), 1);
        assert_eq!(view.file_links[0].text, "Download q.pdf");
        assert!(view.chat_box.contains("old.docx"));
    }
}
