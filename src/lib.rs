pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::{ChatClient, ChatForm, ChatView, ClientConfig, DownloadLink, client, stdio};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ConfigError};
pub use domain::{ChatReply, ChatRequest, DocumentType, GeneratedFile, RequestOptions, ValidationError};
pub use infrastructure::{ChatTransport, ClientError, Downloader, HistoryApi, HttpTransport};

use application::markup::to_terminal;
use application::stdio::StdioContext;
use infrastructure::HttpClientBase;
use infrastructure::download::expand_dir;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use tui::screens::chat::{ChatScreen, run_chat};

/// Failure of a one-shot request. `main` prints it once on stderr.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("⚠ {0}")]
    Invalid(#[from] ValidationError),
    /// The reply was an error or a fetch failure, already shown in the output.
    #[error("request failed")]
    Failed,
}

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mode = cli.resolved_mode();

    let quiet_mode = matches!(mode, RunMode::Stdio | RunMode::Tui);
    init_tracing(quiet_mode);
    info!("Starting docchat");
    debug!(
        mode = ?mode,
        config = ?cli.config,
        base_url = ?cli.base_url,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }
    apply_cli_overrides(&cli, &mut config);

    let base = HttpClientBase::new(&config.base_url, config.timeout())?;
    let transport = HttpTransport::from_base(base.clone());
    let history = HistoryApi::new(base.clone());
    let downloader = Downloader::new(base);
    let client = Arc::new(ChatClient::new(
        transport,
        ClientConfig::new().with_session_id(config.session_id.clone()),
    ));
    let form = initial_form(&cli, &config);

    info!(mode = ?mode, base_url = %config.base_url, "Running client in selected mode");
    match mode {
        RunMode::Once => {
            let download_dir = config.download_dir.clone();
            run_once(&client, &downloader, form, cli.create, download_dir.as_deref()).await?;
        }
        RunMode::Stdio => {
            stdio::run(StdioContext {
                client,
                downloader,
                history,
                download_dir: config.download_dir(),
                form,
            })
            .await?;
        }
        RunMode::Tui => {
            run_chat(ChatScreen {
                client,
                downloader,
                history,
                download_dir: config.download_dir(),
                base_url: config.base_url.clone(),
                form,
            })
            .await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

/// Send one prompt, print the output area and the links, optionally
/// download the files.
async fn run_once(
    client: &ChatClient<HttpTransport>,
    downloader: &Downloader,
    form: ChatForm,
    create: bool,
    download_dir: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let mut view = ChatView::new();
    let sent = if create {
        client.send_create(&form, &mut view).await
    } else {
        client.send_plain(&form, &mut view).await
    };
    sent.map_err(RunError::from)?;

    println!("{}", to_terminal(&view.chat_box));
    for link in &view.file_links {
        println!("{} -> {}", link.text, link.href);
    }

    if let Some(dir) = download_dir {
        for link in &view.file_links {
            match downloader.fetch(link, dir).await {
                Ok(path) => println!("Tersimpan: {}", path.display()),
                Err(err) => eprintln!("Gagal mengunduh {}: {}", link.filename, err.user_message()),
            }
        }
    }

    if view.is_failure() {
        return Err(RunError::Failed.into());
    }
    Ok(())
}

fn initial_form(cli: &Cli, config: &AppConfig) -> ChatForm {
    let filename = cli
        .filename
        .clone()
        .unwrap_or_else(|| config.default_filename.clone());
    let types = if cli.types.is_empty() {
        config.default_types.clone()
    } else {
        cli.types.clone()
    };
    ChatForm::new()
        .with_text(cli.prompt_text())
        .with_filename(filename)
        .with_types(&types)
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(url) = &cli.base_url {
        if *url != config.base_url {
            info!(url = %url, "Overriding base url based on CLI flag");
        }
        config.base_url = url.clone();
    }
    if let Some(session) = cli.session.as_ref().filter(|s| !s.trim().is_empty()) {
        config.session_id = Some(session.clone());
    }
    if let Some(dir) = &cli.download_dir {
        config.download_dir = Some(expand_dir(dir));
    }
}
