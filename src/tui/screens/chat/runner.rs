//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::client::ChatClient;
use crate::application::commands::{
    Command, DownloadTarget, HELP_TEXT, HistoryAction, parse_command, select_links,
};
use crate::application::history::history_list;
use crate::application::view::ChatForm;
use crate::domain::{ChatReply, ChatRequest, DocumentEntry, HistoryDetail};
use crate::infrastructure::{ChatTransport, ClientError, Downloader, HistoryApi};
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Result of chat session
pub enum ChatResult {
    Exit,
}

/// Everything the chat screen needs besides the terminal
pub struct ChatScreen<T: ChatTransport> {
    pub client: Arc<ChatClient<T>>,
    pub downloader: Downloader,
    pub history: HistoryApi,
    pub download_dir: PathBuf,
    pub base_url: String,
    pub form: ChatForm,
}

/// Events from spawned tasks
enum ResponseEvent {
    Reply {
        session_id: String,
        outcome: Result<ChatReply, ClientError>,
    },
    /// Saved conversation to show and continue
    Opened {
        session_id: String,
        detail: HistoryDetail,
    },
    Documents {
        session_id: String,
        entries: Vec<DocumentEntry>,
    },
    /// One line for the notice area
    Notice(String),
}

/// Run the TUI chat interface
pub async fn run_chat<T>(screen: ChatScreen<T>) -> Result<ChatResult, Box<dyn Error>>
where
    T: ChatTransport + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new(screen.form.clone()).with_session(screen.client.session_id());
    state.status_message = Some("Ketik /help untuk daftar perintah".into());

    let result = run_chat_loop(&mut terminal, &mut state, &screen).await;

    restore_terminal()?;
    result
}

async fn run_chat_loop<T>(
    terminal: &mut Tui,
    state: &mut ChatState,
    screen: &ChatScreen<T>,
) -> Result<ChatResult, Box<dyn Error>>
where
    T: ChatTransport + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(16);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, &screen.base_url);
        })?;

        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::Reply {
                    session_id,
                    outcome,
                } => {
                    if !state.apply_reply(&session_id, outcome) {
                        debug!(session_id = %session_id, "Dropped reply from a previous session");
                    }
                }
                ResponseEvent::Opened { session_id, detail } => {
                    if session_id == state.session_id {
                        screen.client.resume_history(detail.id);
                        state.show_history(&detail);
                    }
                }
                ResponseEvent::Documents {
                    session_id,
                    entries,
                } => {
                    if session_id == state.session_id {
                        state.show_documents(&entries);
                    }
                }
                ResponseEvent::Notice(notice) => state.push_notice(notice),
            }
        }

        let timeout = if state.is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            match handle_input(state, event) {
                InputAction::Exit => return Ok(ChatResult::Exit),
                InputAction::Submit => submit(state, screen, &response_tx, false),
                InputAction::SubmitCreate => submit(state, screen, &response_tx, true),
                InputAction::Command(cmd) => {
                    if handle_command(state, screen, &response_tx, &cmd) {
                        return Ok(ChatResult::Exit);
                    }
                }
                InputAction::ToggleType(doc_type) => {
                    let checked = state.form.toggle_type(doc_type);
                    state.status_message = Some(format!(
                        "{}: {}",
                        doc_type.as_str().to_uppercase(),
                        if checked { "ON" } else { "OFF" }
                    ));
                }
                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(1000),
                InputAction::None => {}
            }
        } else if state.is_loading() {
            state.tick_loading();
        }
    }
}

/// Validate, render the placeholder and spawn the request. Overlapping
/// submits are allowed; whichever reply lands last owns the output.
fn submit<T>(
    state: &mut ChatState,
    screen: &ChatScreen<T>,
    tx: &mpsc::Sender<ResponseEvent>,
    create: bool,
) where
    T: ChatTransport + 'static,
{
    state.form.text_input = state.input.clone();
    let prepared = if create {
        screen.client.prepare_create(&state.form)
    } else {
        screen.client.prepare_plain(&state.form)
    };

    match prepared {
        Ok(request) => {
            state.take_input();
            state.begin_request(request.message.clone());
            spawn_request(
                screen.client.clone(),
                state.session_id.clone(),
                request,
                tx.clone(),
            );
        }
        Err(invalid) => state.show_alert(invalid.to_string()),
    }
}

fn spawn_request<T>(
    client: Arc<ChatClient<T>>,
    session_id: String,
    request: ChatRequest,
    tx: mpsc::Sender<ResponseEvent>,
) where
    T: ChatTransport + 'static,
{
    tokio::spawn(async move {
        let outcome = client.dispatch_in_session(&session_id, request).await;
        let _ = tx.send(ResponseEvent::Reply { session_id, outcome }).await;
    });
}

/// Handle a slash command. Returns true when the chat should exit.
fn handle_command<T>(
    state: &mut ChatState,
    screen: &ChatScreen<T>,
    tx: &mpsc::Sender<ResponseEvent>,
    input: &str,
) -> bool
where
    T: ChatTransport + 'static,
{
    let command = parse_command(input);
    debug!(?command, "Processing chat command");

    match command {
        Command::None => {}
        Command::Help => {
            state.notices.clear();
            state.push_notice(HELP_TEXT);
        }
        Command::Create(text) => {
            state.input = text;
            submit(state, screen, tx, true);
        }
        Command::Filename(name) => {
            state.form.filename = name.unwrap_or_default();
            state.status_message = Some(format!(
                "File: {}",
                if state.form.filename.is_empty() {
                    "document (default)"
                } else {
                    state.form.filename.as_str()
                }
            ));
        }
        Command::Toggle(doc_type) => {
            state.form.toggle_type(doc_type);
        }
        Command::ShowTypes => {
            let selected: Vec<&str> = state
                .form
                .selected_types()
                .into_iter()
                .map(|t| t.as_str())
                .collect();
            state.status_message = Some(format!("Tipe: {}", selected.join(", ")));
        }
        Command::SetTypes(types) => {
            state.form = std::mem::take(&mut state.form).with_types(&types);
        }
        Command::Download(target) => start_download(state, screen, tx, target),
        Command::History(action) => start_history(state, screen, tx, action),
        Command::Documents(query) => {
            state.status_message = Some("Memuat dokumen...".into());
            let api = screen.history.clone();
            let session_id = state.session_id.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let event = match api.documents(query.as_deref()).await {
                    Ok(entries) => ResponseEvent::Documents {
                        session_id,
                        entries,
                    },
                    Err(err) => ResponseEvent::Notice(format!(
                        "Gagal memuat dokumen: {}",
                        err.user_message()
                    )),
                };
                let _ = tx.send(event).await;
            });
        }
        Command::Session => {
            state.status_message = Some(format!("Session ID: {}", state.session_id));
        }
        Command::Reset => {
            let session_id = screen.client.reset_session();
            state.reset(session_id);
        }
        Command::Exit => return true,
        Command::Invalid(message) => state.show_alert(message),
        Command::Unknown(name) => {
            state.status_message = Some(format!("Perintah tidak dikenal: {name}. Ketik /help"));
        }
    }
    false
}

fn start_history<T>(
    state: &mut ChatState,
    screen: &ChatScreen<T>,
    tx: &mpsc::Sender<ResponseEvent>,
    action: HistoryAction,
) where
    T: ChatTransport + 'static,
{
    state.notices.clear();
    state.status_message = Some("Memuat riwayat...".into());
    let api = screen.history.clone();
    let client = screen.client.clone();
    let session_id = state.session_id.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let event = match action {
            HistoryAction::List(query) => api
                .list(query.as_deref())
                .await
                .map(|items| ResponseEvent::Notice(history_list(&items))),
            HistoryAction::Open(id) => api
                .get(id)
                .await
                .map(|detail| ResponseEvent::Opened { session_id, detail }),
            HistoryAction::Rename(id, title) => api
                .rename(id, &title)
                .await
                .map(|()| ResponseEvent::Notice(format!("Riwayat #{id} diganti menjadi '{title}'."))),
            HistoryAction::Delete(id) => api.delete(id).await.map(|()| {
                client.forget_history(id);
                ResponseEvent::Notice(format!("Riwayat #{id} dihapus."))
            }),
        };
        let event = event.unwrap_or_else(|err| {
            ResponseEvent::Notice(format!("Permintaan riwayat gagal: {}", err.user_message()))
        });
        let _ = tx.send(event).await;
    });
}

fn start_download<T>(
    state: &mut ChatState,
    screen: &ChatScreen<T>,
    tx: &mpsc::Sender<ResponseEvent>,
    target: DownloadTarget,
) where
    T: ChatTransport + 'static,
{
    let links = match select_links(&state.view.file_links, target) {
        Ok(links) => links,
        Err(message) => {
            state.show_alert(message);
            return;
        }
    };

    state.status_message = Some(format!("Mengunduh {} file...", links.len()));
    let downloader = screen.downloader.clone();
    let dir = screen.download_dir.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        for link in links {
            let notice = match downloader.fetch(&link, &dir).await {
                Ok(path) => format!("Tersimpan: {}", path.display()),
                Err(err) => format!("Gagal mengunduh {}: {}", link.filename, err.user_message()),
            };
            let _ = tx.send(ResponseEvent::Notice(notice)).await;
        }
    });
}
