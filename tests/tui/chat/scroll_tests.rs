//! Scroll tests

use docchat_client::ChatForm;
use docchat_client::tui::screens::chat::ChatState;

#[test]
fn test_scroll_up() {
    let mut state = ChatState::new(ChatForm::new());
    state.scroll_offset = 5;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 4);
}

#[test]
fn test_scroll_up_saturates() {
    let mut state = ChatState::new(ChatForm::new());

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_scroll_down_respects_max() {
    let mut state = ChatState::new(ChatForm::new());
    state.scroll_offset = 5;

    state.scroll_down(6);
    assert_eq!(state.scroll_offset, 6);

    state.scroll_down(6);
    assert_eq!(state.scroll_offset, 6);
}

#[test]
fn test_new_request_scrolls_to_top() {
    let mut state = ChatState::new(ChatForm::new());
    state.scroll_offset = 9;

    state.begin_request("halo".into());
    assert_eq!(state.scroll_offset, 0);
}
