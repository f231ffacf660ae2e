//! ChatState tests

use docchat_client::application::view::ViewStatus;
use docchat_client::tui::screens::chat::ChatState;
use docchat_client::{ChatForm, ChatReply, DocumentType};
use serde_json::json;

fn reply(value: serde_json::Value) -> ChatReply {
    serde_json::from_value(value).expect("reply")
}

#[test]
fn test_chat_state_new() {
    let form = ChatForm::new().with_types(&[DocumentType::Docx]);
    let state = ChatState::new(form.clone());

    assert_eq!(state.form, form);
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.in_flight, 0);
    assert!(!state.is_loading());
    assert!(state.alert.is_none());
    assert_eq!(state.view.status, ViewStatus::Idle);
}

#[test]
fn test_begin_request_shows_placeholder_and_clears_links() {
    let mut state = ChatState::new(ChatForm::new());
    state.view.render_reply(&reply(json!({
        "text": "lama",
        "files": [{ "filename": "a.docx", "url": "/f/a.docx" }]
    })));

    state.begin_request("buat invoice".into());

    assert_eq!(state.view.chat_box, "Thinking...");
    assert!(state.view.file_links.is_empty());
    assert_eq!(state.last_prompt.as_deref(), Some("buat invoice"));
    assert!(state.is_loading());
}

#[test]
fn test_last_reply_to_arrive_wins() {
    let mut state = ChatState::new(ChatForm::new());
    state.begin_request("pertama".into());
    state.begin_request("kedua".into());
    assert_eq!(state.in_flight, 2);

    state.finish_request();
    state.view.apply(Ok(reply(json!({ "text": "balasan kedua" }))));
    assert!(state.is_loading());

    state.finish_request();
    state.view.apply(Ok(reply(json!({ "text": "balasan pertama" }))));

    assert!(!state.is_loading());
    assert_eq!(state.view.chat_box, "balasan pertama");
}

#[test]
fn test_alert_lifecycle() {
    let mut state = ChatState::new(ChatForm::new());

    state.show_alert("Ketik prompt dulu.");
    assert_eq!(state.alert.as_deref(), Some("Ketik prompt dulu."));

    state.dismiss_alert();
    assert!(state.alert.is_none());
}

#[test]
fn test_reset() {
    let mut state = ChatState::new(ChatForm::new().with_filename("mou"));
    state.begin_request("halo".into());
    state.finish_request();
    state.view.apply(Ok(reply(json!({ "text": "hai" }))));
    state.push_notice("Tersimpan: mou.docx");

    state.reset("sess-2");

    assert_eq!(state.session_id, "sess-2");
    assert_eq!(state.view.chat_box, "");
    assert!(state.last_prompt.is_none());
    assert!(state.notices.is_empty());
    assert!(state.status_message.is_some());
    assert_eq!(state.form.filename, "mou");
}

#[test]
fn test_reply_from_previous_session_is_dropped() {
    let mut state = ChatState::new(ChatForm::new()).with_session("sess-1");
    state.begin_request("lama".into());

    state.reset("sess-2");
    assert!(!state.is_loading());

    let applied = state.apply_reply("sess-1", Ok(reply(json!({ "text": "jawaban lama" }))));

    assert!(!applied);
    assert_eq!(state.view.chat_box, "");
    assert_eq!(state.view.status, ViewStatus::Idle);
    assert_eq!(state.in_flight, 0);
}

#[test]
fn test_reply_in_current_session_is_applied() {
    let mut state = ChatState::new(ChatForm::new()).with_session("sess-1");
    state.begin_request("halo".into());
    state.begin_request("lagi".into());

    assert!(state.apply_reply("sess-1", Ok(reply(json!({ "text": "hai" })))));

    assert_eq!(state.view.chat_box, "hai");
    assert_eq!(state.in_flight, 1);
}

#[test]
fn test_loading_tick() {
    let mut state = ChatState::new(ChatForm::new());
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);

    state.begin_request("x".into());
    state.loading_frame = 3;
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}
