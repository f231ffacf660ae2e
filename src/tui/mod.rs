//! TUI module for terminal user interface using Ratatui
//!
//! Full-screen chat with the type checkboxes, filename and download list
//! on one screen.

pub mod screens;
mod terminal;
pub mod theme;

pub use terminal::{Tui, restore_terminal};
