//! TUI Chat interface module
//!
//! - state.rs: chat state, wraps the form/view pair
//! - ui.rs: rendering
//! - input.rs: key handling
//! - runner.rs: event loop and request dispatch

mod input;
mod runner;
mod state;
mod ui;

pub use input::{InputAction, handle_input};
pub use runner::{ChatResult, ChatScreen, run_chat};
pub use state::ChatState;
