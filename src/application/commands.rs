//! Slash commands shared by the STDIO and TUI front-ends

use super::view::DownloadLink;
use crate::domain::DocumentType;

/// Which generated files `/download` should fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTarget {
    All,
    /// 1-based position in the link list
    Index(usize),
}

/// What `/history` should do with the saved conversations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// List, optionally filtered by title
    List(Option<String>),
    /// Show one conversation and continue it
    Open(i64),
    Rename(i64, String),
    Delete(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Help,
    /// Send the prompt with auto-create on
    Create(String),
    /// Set the filename field; `None` clears it
    Filename(Option<String>),
    Toggle(DocumentType),
    ShowTypes,
    SetTypes(Vec<DocumentType>),
    Download(DownloadTarget),
    History(HistoryAction),
    /// List generated documents, optionally filtered
    Documents(Option<String>),
    Session,
    Reset,
    Exit,
    Invalid(String),
    Unknown(String),
}

/// Parse a line starting with `/` or `:`.
pub fn parse_command(input: &str) -> Command {
    let cmd = input.trim().trim_start_matches(['/', ':']);
    let (name, rest) = match cmd.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (cmd, ""),
    };
    let name = name.to_ascii_lowercase();

    match name.as_str() {
        "" => Command::None,

        "help" | "?" => Command::Help,

        "create" | "buat" => Command::Create(rest.to_string()),

        "filename" | "file" | "name" => {
            if rest.is_empty() {
                Command::Filename(None)
            } else {
                Command::Filename(Some(rest.to_string()))
            }
        }

        "docx" => Command::Toggle(DocumentType::Docx),
        "xlsx" => Command::Toggle(DocumentType::Xlsx),
        "pptx" => Command::Toggle(DocumentType::Pptx),

        "types" | "type" => parse_types(rest),

        "download" | "dl" | "unduh" => parse_download(rest),

        "history" | "riwayat" => parse_history(rest),

        "docs" | "documents" | "dokumen" => Command::Documents(non_empty(rest)),

        "session" => Command::Session,

        "reset" | "clear" | "new" => Command::Reset,

        "exit" | "quit" | "keluar" | "q" => Command::Exit,

        _ => Command::Unknown(name),
    }
}

fn parse_types(rest: &str) -> Command {
    if rest.is_empty() {
        return Command::ShowTypes;
    }

    let mut types = Vec::new();
    for part in rest.split([',', ' ']).filter(|p| !p.trim().is_empty()) {
        match DocumentType::from_str(part) {
            Some(doc_type) => {
                if !types.contains(&doc_type) {
                    types.push(doc_type);
                }
            }
            None => {
                return Command::Invalid(format!(
                    "Tipe '{}' tidak dikenal. Gunakan docx, xlsx, atau pptx.",
                    part.trim()
                ));
            }
        }
    }
    types.sort();
    Command::SetTypes(types)
}

fn parse_download(rest: &str) -> Command {
    if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
        return Command::Download(DownloadTarget::All);
    }
    match rest.parse::<usize>() {
        Ok(index) if index > 0 => Command::Download(DownloadTarget::Index(index)),
        _ => Command::Invalid(format!(
            "Nomor file '{rest}' tidak valid. Gunakan /download <nomor> atau /download all."
        )),
    }
}

fn parse_history(rest: &str) -> Command {
    let (action, args) = match rest.split_once(char::is_whitespace) {
        Some((action, args)) => (action.to_ascii_lowercase(), args.trim()),
        None => (rest.to_ascii_lowercase(), ""),
    };
    if !matches!(
        action.as_str(),
        "open" | "buka" | "delete" | "hapus" | "rename" | "ganti"
    ) {
        return Command::History(HistoryAction::List(non_empty(rest)));
    }

    let (id, title) = match args.split_once(char::is_whitespace) {
        Some((id, title)) => (id, title.trim()),
        None => (args, ""),
    };
    let id = match id.parse::<i64>() {
        Ok(id) if id > 0 => id,
        _ => return Command::Invalid(format!("ID riwayat '{id}' tidak valid.")),
    };

    match action.as_str() {
        "open" | "buka" => Command::History(HistoryAction::Open(id)),
        "delete" | "hapus" => Command::History(HistoryAction::Delete(id)),
        _ if title.is_empty() => {
            Command::Invalid("Judul wajib diisi: /history rename <id> <judul>.".to_string())
        }
        _ => Command::History(HistoryAction::Rename(id, title.to_string())),
    }
}

fn non_empty(rest: &str) -> Option<String> {
    Some(rest.to_string()).filter(|r| !r.is_empty())
}

/// Pick the links a `/download` command refers to.
pub fn select_links(
    links: &[DownloadLink],
    target: DownloadTarget,
) -> Result<Vec<DownloadLink>, String> {
    if links.is_empty() {
        return Err("Belum ada file untuk diunduh.".to_string());
    }
    match target {
        DownloadTarget::All => Ok(links.to_vec()),
        DownloadTarget::Index(index) => index
            .checked_sub(1)
            .and_then(|i| links.get(i))
            .cloned()
            .map(|link| vec![link])
            .ok_or_else(|| format!("File nomor {index} tidak ada (tersedia {}).", links.len())),
    }
}

/// Help text listing every command
pub const HELP_TEXT: &str = r#"Perintah yang tersedia:
  /help               - Tampilkan bantuan ini
  /create <prompt>    - Kirim prompt dan buat dokumen
  /filename [nama]    - Atur nama file (kosong = "document")
  /docx /xlsx /pptx   - Centang/hapus centang tipe file
  /types [daftar]     - Lihat atau atur tipe file, mis. /types docx,xlsx
  /download [n|all]   - Unduh file hasil terakhir
  /history [cari]     - Daftar riwayat percakapan
  /history open <id>  - Tampilkan dan lanjutkan riwayat
  /history rename <id> <judul>
  /history delete <id>
  /docs [cari]        - Daftar dokumen yang pernah dibuat
  /session            - Tampilkan session ID
  /reset              - Mulai sesi baru
  /exit               - Keluar"#;
