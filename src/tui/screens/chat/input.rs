//! Chat input handling

use super::state::ChatState;
use crate::domain::DocumentType;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Send the input as a plain prompt
    Submit,
    /// Send the input with auto-create on
    SubmitCreate,
    /// Exit the chat
    Exit,
    /// Execute a command
    Command(String),
    /// Toggle one of the type checkboxes
    ToggleType(DocumentType),
    ScrollUp,
    ScrollDown,
}

/// Handle a terminal event and update state
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(state, key),
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    if state.alert.is_some() {
        state.dismiss_alert();
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.input.clear();
        state.cursor_pos = 0;
        return InputAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return InputAction::SubmitCreate;
    }

    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => InputAction::SubmitCreate,
        KeyCode::Enter => {
            if state.is_command() {
                let cmd = state.take_input();
                return InputAction::Command(cmd);
            }
            InputAction::Submit
        }
        KeyCode::F(1) => InputAction::ToggleType(DocumentType::Docx),
        KeyCode::F(2) => InputAction::ToggleType(DocumentType::Xlsx),
        KeyCode::F(3) => InputAction::ToggleType(DocumentType::Pptx),
        KeyCode::Esc => {
            state.input.clear();
            state.cursor_pos = 0;
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}
