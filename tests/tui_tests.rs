//! TUI Unit Tests
//!
//! Tests for the Ratatui chat screen:
//! - Chat: ChatState editing, request bookkeeping, key handling

mod tui;

// Re-export tests
pub use tui::*;
