use clap::{Parser, ValueEnum};

use crate::domain::DocumentType;

#[derive(Parser, Debug)]
#[command(
    name = "docchat",
    version,
    about = "Client chat untuk generator dokumen (invoice, MoU, quotation)"
)]
pub struct Cli {
    /// Path to docchat.toml
    #[arg(long)]
    pub config: Option<String>,
    /// Backend origin, e.g. http://127.0.0.1:5000
    #[arg(long)]
    pub base_url: Option<String>,
    /// Fixed X-Session-ID for the backend conversation
    #[arg(long)]
    pub session: Option<String>,
    #[arg(long, short, value_enum)]
    pub mode: Option<RunMode>,
    /// Ask the backend to generate documents (once mode)
    #[arg(long)]
    pub create: bool,
    /// Base name for generated files
    #[arg(long)]
    pub filename: Option<String>,
    /// Document type to generate; repeat for several
    #[arg(long = "type", short = 't', value_parser = parse_document_type)]
    pub types: Vec<DocumentType>,
    /// Directory for downloaded files
    #[arg(long)]
    pub download_dir: Option<String>,
    /// Prompt text (once mode)
    pub prompt: Vec<String>,
}

impl Cli {
    /// Explicit mode, else `once` when a prompt was given and `tui` otherwise.
    pub fn resolved_mode(&self) -> RunMode {
        match self.mode {
            Some(mode) => mode,
            None if self.prompt.is_empty() => RunMode::Tui,
            None => RunMode::Once,
        }
    }

    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Send one prompt and print the reply
    Once,
    /// Line-based interactive chat
    Stdio,
    /// Full-screen chat
    Tui,
}

fn parse_document_type(value: &str) -> Result<DocumentType, String> {
    DocumentType::from_str(value)
        .ok_or_else(|| format!("unknown document type '{value}' (expected docx, xlsx or pptx)"))
}
