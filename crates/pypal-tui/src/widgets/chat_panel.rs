//! Chat panel widget
//!
//! Renders the session transcript plus the input line. Assistant bubbles are
//! decorated with the avatar of whichever tutor is selected at render time
//! (live binding, same as the source UI).

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use pypal_app::{AppState, Focus};

use crate::theme;

/// Placeholder shown while the input line is empty
const INPUT_PLACEHOLDER: &str = "Ask me anything about Python!";

/// Transcript plus input line
pub struct ChatPanel<'a> {
    state: &'a AppState,
}

impl<'a> ChatPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn message_lines(&self) -> Vec<Line<'_>> {
        let tutor = self.state.active_tutor();
        self.state
            .transcript
            .iter()
            .map(|msg| {
                let (prefix, style) = if msg.is_user() {
                    ("You".to_string(), theme::user_bubble())
                } else {
                    (format!("{} {}", tutor.avatar, tutor.name), theme::assistant_bubble())
                };
                Line::from(vec![
                    Span::styled(format!("{} ", msg.formatted_time()), theme::dim()),
                    Span::styled(prefix, style),
                    Span::styled(" ▸ ", theme::dim()),
                    Span::styled(msg.text.clone(), style),
                ])
            })
            .collect()
    }
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Chat;
        let block = Block::default()
            .title(" Chat ")
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(theme::focus_border(focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        // Transcript, pinned to the latest messages
        let mut lines = self.message_lines();
        let visible = chunks[0].height as usize;
        if lines.len() > visible {
            lines.drain(..lines.len() - visible);
        }
        Paragraph::new(lines).render(chunks[0], buf);

        // Input line
        let input = if self.state.chat_input.is_empty() {
            Line::from(vec![
                Span::styled("> ", theme::dim()),
                Span::styled(INPUT_PLACEHOLDER, theme::dim()),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", theme::key_hint()),
                Span::raw(self.state.chat_input.clone()),
                Span::styled(if focused { "█" } else { "" }, theme::key_hint()),
            ])
        };
        Paragraph::new(input).render(chunks[1], buf);
    }
}
