//! Chat screen state

use crate::application::view::{ChatForm, ChatView};
use crate::domain::{ChatReply, DocumentEntry, HistoryDetail};
use crate::infrastructure::ClientError;

/// Chat screen state: the form/view pair plus editing and popup state
pub struct ChatState {
    /// Form inputs (filename and type checkboxes persist between sends)
    pub form: ChatForm,
    /// Output area and download links
    pub view: ChatView,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, counted in chars
    pub cursor_pos: usize,
    /// Scroll offset for the output area
    pub scroll_offset: u16,
    /// Last prompt that went out
    pub last_prompt: Option<String>,
    /// Session the screen currently shows; replies sent under another are dropped
    pub session_id: String,
    /// Requests still in flight; replies are applied in arrival order
    pub in_flight: usize,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Blocking validation message, dismissed by any key
    pub alert: Option<String>,
    /// Status message
    pub status_message: Option<String>,
    /// Lines from /help and downloads, shown under the output
    pub notices: Vec<String>,
}

impl ChatState {
    pub fn new(form: ChatForm) -> Self {
        Self {
            form,
            view: ChatView::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            last_prompt: None,
            session_id: String::new(),
            in_flight: 0,
            loading_frame: 0,
            alert: None,
            status_message: None,
            notices: Vec::new(),
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_pos);
        self.input.insert(idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let idx = self.byte_index(self.cursor_pos - 1);
            self.input.remove(idx);
            self.cursor_pos -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.char_len() {
            let idx = self.byte_index(self.cursor_pos);
            self.input.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Mark a request as sent: placeholder in the output, links cleared.
    pub fn begin_request(&mut self, prompt: String) {
        self.view.begin();
        self.last_prompt = Some(prompt);
        self.in_flight += 1;
        self.scroll_offset = 0;
        self.status_message = None;
    }

    /// Account for one finished request
    pub fn finish_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.scroll_offset = 0;
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn push_notice(&mut self, notice: impl Into<String>) {
        self.notices.push(notice.into());
    }

    /// Render a reply sent under `session_id`. Returns false and leaves the
    /// screen untouched when the session has been reset since.
    pub fn apply_reply(
        &mut self,
        session_id: &str,
        outcome: Result<ChatReply, ClientError>,
    ) -> bool {
        if session_id != self.session_id {
            return false;
        }
        self.finish_request();
        self.view.apply(outcome);
        true
    }

    /// Show a saved conversation in place of the last exchange
    pub fn show_history(&mut self, detail: &HistoryDetail) {
        self.view.show_history(detail);
        self.last_prompt = None;
        self.scroll_offset = 0;
        self.status_message = Some(format!("Melanjutkan riwayat #{}", detail.id));
    }

    pub fn show_documents(&mut self, entries: &[DocumentEntry]) {
        self.view.show_documents(entries);
        self.last_prompt = None;
        self.scroll_offset = 0;
        self.status_message = Some(format!("{} dokumen", entries.len()));
    }

    /// Clear the screen for a new backend session
    pub fn reset(&mut self, session_id: impl Into<String>) {
        self.session_id = session_id.into();
        self.in_flight = 0;
        self.loading_frame = 0;
        self.view = ChatView::new();
        self.last_prompt = None;
        self.notices.clear();
        self.scroll_offset = 0;
        self.status_message = Some("Session reset".into());
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.is_loading() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/') || self.input.starts_with(':')
    }
}
