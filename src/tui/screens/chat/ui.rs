//! Chat UI rendering components

use super::state::ChatState;
use crate::application::markup::to_terminal;
use crate::application::view::ViewStatus;
use crate::domain::{DEFAULT_FILENAME, DocumentType};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState, base_url: &str) {
        let area = frame.area();
        let link_rows = (state.view.file_links.len() as u16).min(6);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // Status bar
                Constraint::Min(5),                // Output area
                Constraint::Length(link_rows + 2), // Download links
                Constraint::Length(1),             // Options line
                Constraint::Length(3),             // Input area
                Constraint::Length(1),             // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, base_url);
        Self::render_output(frame, chunks[1], state);
        Self::render_links(frame, chunks[2], state);
        Self::render_options(frame, chunks[3], state);
        Self::render_input(frame, chunks[4], state);
        Self::render_help_bar(frame, chunks[5], state);

        if let Some(alert) = &state.alert {
            Self::render_alert(frame, area, alert);
        }
    }

    fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        state: &ChatState,
        base_url: &str,
    ) {
        let session_display: String = state.session_id.chars().take(8).collect();

        let loading_indicator = if state.is_loading() {
            Span::styled(
                format!(" {} {} ", SPINNER[state.loading_frame], state.in_flight),
                theme::loading(),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {s} "), theme::muted()))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" 📄 ", theme::title()),
            Span::styled(format!("Session: {session_display} "), theme::text()),
            Span::styled("│ ", theme::muted()),
            Span::styled(base_url.to_string(), theme::title()),
            loading_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(status_line).block(block), area);
    }

    /// Output area: last prompt, then the chat box
    fn render_output(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_height = area.height.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = Vec::new();

        if let Some(prompt) = &state.last_prompt {
            lines.push(Line::from(vec![
                Span::styled("You: ", theme::user_prefix()),
                Span::raw(prompt.clone()),
            ]));
            lines.push(Line::from(""));
        }

        let body_style = match state.view.status {
            ViewStatus::AppError | ViewStatus::FetchError => theme::error(),
            ViewStatus::Pending => theme::loading(),
            ViewStatus::Idle | ViewStatus::Replied | ViewStatus::Browsing => theme::text(),
        };

        let rendered = to_terminal(&state.view.chat_box);
        for (idx, line) in rendered.lines().enumerate() {
            if idx == 0 && state.view.status == ViewStatus::Replied {
                lines.push(Line::from(vec![
                    Span::styled("AI: ", theme::ai_prefix()),
                    Span::styled(line.to_string(), body_style),
                ]));
            } else {
                lines.push(Line::from(Span::styled(line.to_string(), body_style)));
            }
        }

        if !state.notices.is_empty() {
            lines.push(Line::from(""));
            for notice in &state.notices {
                for line in notice.lines() {
                    lines.push(Line::from(Span::styled(line.to_string(), theme::muted())));
                }
            }
        }

        let max_scroll = lines.len().saturating_sub(inner_height) as u16;
        let scroll = state.scroll_offset.min(max_scroll);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    fn render_links(frame: &mut Frame, area: Rect, state: &ChatState) {
        let lines: Vec<Line> = if state.view.file_links.is_empty() {
            vec![Line::from(Span::styled("(belum ada file)", theme::muted()))]
        } else {
            state
                .view
                .file_links
                .iter()
                .enumerate()
                .map(|(idx, link)| {
                    Line::from(vec![
                        Span::styled(format!("[{}] ", idx + 1), theme::muted()),
                        Span::styled(link.text.clone(), theme::link()),
                        Span::styled(format!("  {}", link.href), theme::muted()),
                    ])
                })
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(" Files ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Type checkboxes and the filename field
    fn render_options(frame: &mut Frame, area: Rect, state: &ChatState) {
        let mut spans = vec![Span::raw(" ")];
        for (idx, doc_type) in DocumentType::ALL.into_iter().enumerate() {
            let style = if state.form.is_selected(doc_type) {
                theme::checked()
            } else {
                theme::unchecked()
            };
            spans.push(Span::styled(
                format!(" F{} {} ", idx + 1, doc_type.as_str().to_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        let filename = if state.form.filename.trim().is_empty() {
            Span::styled(format!("{DEFAULT_FILENAME} (default)"), theme::muted())
        } else {
            Span::styled(state.form.filename.clone(), theme::text())
        };
        spans.push(Span::styled("│ File: ", theme::muted()));
        spans.push(filename);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let display_input = if state.input.is_empty() {
            "Ketik prompt...".to_string()
        } else {
            let mut chars: Vec<char> = state.input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            chars.into_iter().collect()
        };

        let input_style = if state.input.is_empty() {
            theme::muted()
        } else {
            theme::text()
        };

        let input_line = Line::from(vec![
            Span::styled("> ", theme::user_prefix()),
            Span::styled(display_input, input_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_active())
            .title(if state.is_command() {
                " Command "
            } else {
                " Prompt "
            });
        frame.render_widget(Paragraph::new(input_line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let mut spans = vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::raw(": Send │ "),
            Span::styled("Ctrl+S", theme::key_hint()),
            Span::raw(": Send & Create │ "),
            Span::styled("F1-F3", theme::key_hint()),
            Span::raw(": Types │ "),
            Span::styled("/help", theme::key_hint()),
            Span::raw(" │ "),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::raw(": Exit "),
        ];
        if state.is_loading() {
            spans.push(Span::styled(" Menunggu respons... ", theme::loading()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Centered popup standing in for a browser alert
    fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
        let width = (message.chars().count() as u16 + 6).clamp(30, area.width.max(30));
        let popup = centered(area, width.min(area.width), 5);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::error())
            .title(" Peringatan ");
        let para = Paragraph::new(vec![
            Line::from(Span::styled(message.to_string(), theme::text())),
            Line::from(""),
            Line::from(Span::styled("Tekan tombol apa saja...", theme::muted())),
        ])
        .block(block)
        .wrap(Wrap { trim: true });

        frame.render_widget(Clear, popup);
        frame.render_widget(para, popup);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height.min(area.height))
}
