//! TUI unit tests module
//!
//! - chat/: ChatState, input handling and scroll tests

pub mod chat;
