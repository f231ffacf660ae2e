use super::client::ChatClient;
use super::commands::{
    Command, DownloadTarget, HELP_TEXT, HistoryAction, parse_command, select_links,
};
use super::history::history_list;
use super::markup::to_terminal;
use super::view::{ChatForm, ChatView};
use crate::domain::DocumentType;
use crate::infrastructure::{ChatTransport, Downloader, HistoryApi};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a STDIO session needs besides the terminal
pub struct StdioContext<T: ChatTransport> {
    pub client: Arc<ChatClient<T>>,
    pub downloader: Downloader,
    pub history: HistoryApi,
    pub download_dir: PathBuf,
    pub form: ChatForm,
}

enum LoopControl {
    Continue,
    Exit,
}

pub async fn run<T>(mut ctx: StdioContext<T>) -> Result<(), StdioError>
where
    T: ChatTransport + 'static,
{
    let mut stdout = io::stdout();
    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();
    let mut view = ChatView::new();

    print_banner(&mut stdout, &ctx).await?;

    loop {
        prompt(&mut stdout, &ctx.form).await?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                write_line(
                    &mut stdout,
                    "\nInput STDIN ditutup. Keluar dari mode STDIO.",
                )
                .await?;
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if matches!(input.chars().next(), Some('/') | Some(':')) {
            match handle_command(input, &mut ctx, &mut view, &mut stdout).await? {
                LoopControl::Continue => continue,
                LoopControl::Exit => break,
            }
        } else {
            ctx.form.text_input = input.to_string();
            send(&ctx, &mut view, false, &mut stdout).await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}

async fn handle_command<T: ChatTransport>(
    input: &str,
    ctx: &mut StdioContext<T>,
    view: &mut ChatView,
    stdout: &mut io::Stdout,
) -> Result<LoopControl, StdioError> {
    let command = parse_command(input);
    debug!(?command, "Processing STDIO command");

    match command {
        Command::None => {}
        Command::Help => write_line(stdout, HELP_TEXT).await?,
        Command::Create(text) => {
            ctx.form.text_input = text;
            send(ctx, view, true, stdout).await?;
        }
        Command::Filename(name) => {
            ctx.form.filename = name.unwrap_or_default();
            let shown = if ctx.form.filename.is_empty() {
                "(default: document)"
            } else {
                ctx.form.filename.as_str()
            };
            write_line(stdout, &format!("Nama file: {shown}")).await?;
        }
        Command::Toggle(doc_type) => {
            let checked = ctx.form.toggle_type(doc_type);
            write_line(
                stdout,
                &format!(
                    "{}: {}",
                    doc_type.as_str().to_uppercase(),
                    if checked { "dipilih" } else { "tidak dipilih" }
                ),
            )
            .await?;
        }
        Command::ShowTypes => {
            write_line(stdout, &format!("Tipe file: {}", types_label(&ctx.form))).await?;
        }
        Command::SetTypes(types) => {
            ctx.form = std::mem::take(&mut ctx.form).with_types(&types);
            write_line(stdout, &format!("Tipe file: {}", types_label(&ctx.form))).await?;
        }
        Command::Download(target) => download(ctx, view, target, stdout).await?,
        Command::History(action) => history(ctx, view, action, stdout).await?,
        Command::Documents(query) => match ctx.history.documents(query.as_deref()).await {
            Ok(entries) => {
                view.show_documents(&entries);
                print_view(stdout, view).await?;
            }
            Err(err) => {
                error!(%err, "Listing documents failed");
                write_line(stdout, &format!("Gagal memuat dokumen: {}", err.user_message()))
                    .await?;
            }
        },
        Command::Session => {
            write_line(stdout, &format!("Session ID: {}", ctx.client.session_id())).await?;
            if let Some(history_id) = ctx.client.history_id() {
                write_line(stdout, &format!("History ID: {history_id}")).await?;
            }
        }
        Command::Reset => {
            let session_id = ctx.client.reset_session();
            *view = ChatView::new();
            write_line(stdout, &format!("Sesi baru dimulai: {session_id}")).await?;
        }
        Command::Exit => {
            write_line(stdout, "Menutup mode STDIO.").await?;
            return Ok(LoopControl::Exit);
        }
        Command::Invalid(message) => write_line(stdout, &message).await?,
        Command::Unknown(name) => {
            write_line(
                stdout,
                &format!("Perintah '{name}' tidak dikenal. Gunakan /help untuk bantuan."),
            )
            .await?;
        }
    }

    Ok(LoopControl::Continue)
}

async fn send<T: ChatTransport>(
    ctx: &StdioContext<T>,
    view: &mut ChatView,
    create: bool,
    stdout: &mut io::Stdout,
) -> Result<(), StdioError> {
    let prepared = if create {
        ctx.client.prepare_create(&ctx.form)
    } else {
        ctx.client.prepare_plain(&ctx.form)
    };
    let request = match prepared {
        Ok(request) => request,
        Err(invalid) => {
            write_line(stdout, &format!("⚠ {invalid}")).await?;
            return Ok(());
        }
    };

    info!(create, "Processing interactive STDIO request");
    view.begin();
    write_line(stdout, &view.chat_box).await?;
    stdout.flush().await?;

    let outcome = ctx.client.dispatch(request).await;
    view.apply(outcome);
    print_view(stdout, view).await
}

async fn history<T: ChatTransport>(
    ctx: &StdioContext<T>,
    view: &mut ChatView,
    action: HistoryAction,
    stdout: &mut io::Stdout,
) -> Result<(), StdioError> {
    let outcome = match action {
        HistoryAction::List(query) => ctx
            .history
            .list(query.as_deref())
            .await
            .map(|items| history_list(&items)),
        HistoryAction::Open(id) => match ctx.history.get(id).await {
            Ok(detail) => {
                view.show_history(&detail);
                ctx.client.resume_history(detail.id);
                print_view(stdout, view).await?;
                Ok(format!("Pesan berikutnya melanjutkan riwayat #{}.", detail.id))
            }
            Err(err) => Err(err),
        },
        HistoryAction::Rename(id, title) => ctx
            .history
            .rename(id, &title)
            .await
            .map(|()| format!("Riwayat #{id} diganti menjadi '{title}'.")),
        HistoryAction::Delete(id) => ctx.history.delete(id).await.map(|()| {
            ctx.client.forget_history(id);
            format!("Riwayat #{id} dihapus.")
        }),
    };

    match outcome {
        Ok(message) => write_line(stdout, &message).await?,
        Err(err) => {
            error!(%err, "History request failed");
            write_line(stdout, &format!("Permintaan riwayat gagal: {}", err.user_message())).await?;
        }
    }
    Ok(())
}

async fn download<T: ChatTransport>(
    ctx: &StdioContext<T>,
    view: &ChatView,
    target: DownloadTarget,
    stdout: &mut io::Stdout,
) -> Result<(), StdioError> {
    let links = match select_links(&view.file_links, target) {
        Ok(links) => links,
        Err(message) => return write_line(stdout, &message).await.map_err(Into::into),
    };

    for link in &links {
        match ctx.downloader.fetch(link, &ctx.download_dir).await {
            Ok(path) => {
                write_line(stdout, &format!("Tersimpan: {}", path.display())).await?;
            }
            Err(err) => {
                error!(%err, file = link.filename.as_str(), "Download failed");
                write_line(
                    stdout,
                    &format!("Gagal mengunduh {}: {}", link.filename, err.user_message()),
                )
                .await?;
            }
        }
    }
    Ok(())
}

async fn print_view(stdout: &mut io::Stdout, view: &ChatView) -> Result<(), StdioError> {
    write_line(stdout, "").await?;
    write_line(stdout, &to_terminal(&view.chat_box)).await?;
    if !view.file_links.is_empty() {
        write_line(stdout, "").await?;
        for (idx, link) in view.file_links.iter().enumerate() {
            write_line(stdout, &format!("  [{}] {} -> {}", idx + 1, link.text, link.href))
                .await?;
        }
        write_line(stdout, "(Gunakan /download untuk menyimpan file.)").await?;
    }
    stdout.flush().await?;
    Ok(())
}

fn types_label(form: &ChatForm) -> String {
    DocumentType::ALL
        .into_iter()
        .map(|t| {
            let mark = if form.is_selected(t) { "x" } else { " " };
            format!("[{mark}] {}", t.as_str().to_uppercase())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

async fn print_banner<T: ChatTransport>(
    stdout: &mut io::Stdout,
    ctx: &StdioContext<T>,
) -> io::Result<()> {
    write_line(stdout, "=== Document Generator Chat (STDIO) ===").await?;
    write_line(stdout, &format!("Session : {}", ctx.client.session_id())).await?;
    write_line(stdout, &format!("Unduhan : {}", ctx.download_dir.display())).await?;
    write_line(stdout, &format!("Tipe    : {}", types_label(&ctx.form))).await?;
    write_line(stdout, "Ketik pesan lalu Enter, atau /help untuk daftar perintah.").await?;
    write_line(stdout, "").await
}

async fn prompt(stdout: &mut io::Stdout, form: &ChatForm) -> io::Result<()> {
    let label = if form.filename.is_empty() {
        "\n> ".to_string()
    } else {
        format!("\n[{}] > ", form.filename)
    };
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await
}

async fn write_line(stdout: &mut io::Stdout, line: &str) -> io::Result<()> {
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    Ok(())
}
