//! Input handling tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use docchat_client::tui::screens::chat::{ChatState, InputAction, handle_input};
use docchat_client::{ChatForm, DocumentType};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn state() -> ChatState {
    ChatState::new(ChatForm::new())
}

#[test]
fn test_insert_char() {
    let mut state = state();

    state.insert_char('H');
    state.insert_char('i');

    assert_eq!(state.input, "Hi");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_insert_multibyte_char_mid_input() {
    let mut state = state();
    state.input = "ab".to_string();
    state.cursor_pos = 1;

    state.insert_char('é');
    state.move_cursor_end();
    state.insert_char('✓');

    assert_eq!(state.input, "aéb✓");
    assert_eq!(state.cursor_pos, 4);
}

#[test]
fn test_delete_char() {
    let mut state = state();
    state.input = "Hello".to_string();
    state.cursor_pos = 5;

    state.delete_char();

    assert_eq!(state.input, "Hell");
    assert_eq!(state.cursor_pos, 4);
}

#[test]
fn test_delete_char_at_start() {
    let mut state = state();
    state.input = "Hello".to_string();
    state.cursor_pos = 0;

    state.delete_char();

    assert_eq!(state.input, "Hello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_delete_char_forward() {
    let mut state = state();
    state.input = "Héllo".to_string();
    state.cursor_pos = 1;

    state.delete_char_forward();

    assert_eq!(state.input, "Hllo");
    assert_eq!(state.cursor_pos, 1);
}

#[test]
fn test_enter_submits_even_when_empty() {
    let mut state = state();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_enter_on_command_returns_command() {
    let mut state = state();
    state.input = "/filename laporan".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Command("/filename laporan".into()));
    assert!(state.input.is_empty());
}

#[test]
fn test_ctrl_s_submits_create() {
    let mut state = state();
    state.input = "buat mou".to_string();
    assert_eq!(handle_input(&mut state, ctrl('s')), InputAction::SubmitCreate);
}

#[test]
fn test_function_keys_toggle_types() {
    let mut state = state();
    assert_eq!(
        handle_input(&mut state, key(KeyCode::F(1))),
        InputAction::ToggleType(DocumentType::Docx)
    );
    assert_eq!(
        handle_input(&mut state, key(KeyCode::F(3))),
        InputAction::ToggleType(DocumentType::Pptx)
    );
}

#[test]
fn test_alert_swallows_next_key() {
    let mut state = state();
    state.show_alert("Pilih minimal satu tipe file (DOCX/XLSX/PPTX).");

    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::None);
    assert!(state.alert.is_none());
}

#[test]
fn test_prompt_may_start_with_q() {
    let mut state = state();

    for c in "quotation".chars() {
        assert_eq!(handle_input(&mut state, key(KeyCode::Char(c))), InputAction::None);
    }

    assert_eq!(state.input, "quotation");
    assert_eq!(state.cursor_pos, 9);
}

#[test]
fn test_ctrl_q_exits() {
    let mut state = state();
    state.input = "draft".to_string();

    assert_eq!(handle_input(&mut state, ctrl('q')), InputAction::Exit);
}
