//! Text for history and document listings

use crate::domain::{DocumentEntry, HistoryDetail, HistorySummary};

const UNTITLED: &str = "(tanpa judul)";

/// One line per saved conversation: id, title, flow and date.
pub fn history_list(items: &[HistorySummary]) -> String {
    if items.is_empty() {
        return "Belum ada riwayat.".to_string();
    }
    items
        .iter()
        .map(|item| {
            let mut line = format!(
                "#{:<4} {}",
                item.id,
                item.title.as_deref().unwrap_or(UNTITLED)
            );
            if let Some(task) = item.task_type.as_deref().filter(|t| !t.is_empty()) {
                line.push_str(&format!(" [{task}]"));
            }
            if let Some(date) = item.created_at.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!("  {date}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header plus every stored message, oldest first.
pub fn transcript(detail: &HistoryDetail) -> String {
    let mut parts = vec![format!(
        "Riwayat #{}: {}",
        detail.id,
        detail.title.as_deref().unwrap_or(UNTITLED)
    )];
    for message in &detail.messages {
        let who = if message.is_user() { "Anda" } else { "AI" };
        parts.push(format!("{who}: {}", message.text));
    }
    if detail.messages.is_empty() {
        parts.push("(belum ada pesan)".to_string());
    }
    parts.join("\n\n")
}

/// One line per generated file. Downloadable files also appear in the
/// link list, in the same order.
pub fn documents_list(items: &[DocumentEntry]) -> String {
    if items.is_empty() {
        return "Belum ada dokumen.".to_string();
    }
    items
        .iter()
        .map(|doc| {
            let title = doc.history_title.as_deref().unwrap_or(UNTITLED);
            let mut line = format!("{}  (#{} {title})", doc.filename, doc.history_id);
            if doc.as_file().is_none() {
                line.push_str("  tanpa tautan");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_shows_title_task_and_date() {
        let items: Vec<HistorySummary> = serde_json::from_value(json!([
            { "id": 7, "title": "Invoice PT Maju", "task_type": "invoice", "created_at": "2025-03-01" },
            { "id": 6, "title": null }
        ]))
        .unwrap();

        assert_eq!(
            history_list(&items),
            "#7    Invoice PT Maju [invoice]  2025-03-01\n#6    (tanpa judul)"
        );
        assert_eq!(history_list(&[]), "Belum ada riwayat.");
    }

    #[test]
    fn transcript_labels_senders() {
        let detail: HistoryDetail = serde_json::from_value(json!({
            "id": 2,
            "title": "MoU",
            "messages": [
                { "sender": "user", "text": "buat mou" },
                { "sender": "assistant", "text": "Nama pihak pertama?" }
            ]
        }))
        .unwrap();

        assert_eq!(
            transcript(&detail),
            "Riwayat #2: MoU\n\nAnda: buat mou\n\nAI: Nama pihak pertama?"
        );
    }
}
