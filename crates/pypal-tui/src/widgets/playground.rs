//! Code playground widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use pypal_app::{AppState, Focus};

use crate::theme;

/// The code buffer plus run hint
pub struct Playground<'a> {
    state: &'a AppState,
}

impl<'a> Playground<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Playground<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Playground;
        let block = Block::default()
            .title(" Code Playground ")
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(theme::focus_border(focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        // Code buffer with line numbers
        let mut lines: Vec<Line> = self
            .state
            .editor
            .code
            .lines()
            .enumerate()
            .map(|(i, line)| {
                Line::from(vec![
                    Span::styled(format!("{:>3} ", i + 1), theme::dim()),
                    Span::raw(line.to_string()),
                ])
            })
            .collect();
        if focused {
            // Block cursor on the line being edited
            let cursor = Span::styled("█", theme::key_hint());
            if self.state.editor.code.ends_with('\n') || lines.is_empty() {
                let line_no = lines.len() + 1;
                lines.push(Line::from(vec![
                    Span::styled(format!("{:>3} ", line_no), theme::dim()),
                    cursor,
                ]));
            } else if let Some(last) = lines.last_mut() {
                last.push_span(cursor);
            }
        }
        Paragraph::new(lines).render(chunks[0], buf);

        // Run hint
        let hint = Line::from(vec![
            Span::styled("[", theme::dim()),
            Span::styled("Ctrl+R", theme::key_hint()),
            Span::styled("] Run Code", theme::dim()),
        ]);
        Paragraph::new(hint).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(Playground::new(state), frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_default_buffer_is_shown() {
        let state = AppState::new();
        let content = render_to_string(&state);
        assert!(content.contains("print"));
        assert!(content.contains("Hello, Python!"));
    }

    #[test]
    fn test_run_hint_is_shown() {
        let state = AppState::new();
        assert!(render_to_string(&state).contains("Ctrl+R"));
    }

    #[test]
    fn test_challenge_starter_is_shown_after_selection() {
        let mut state = AppState::new();
        state.start_challenge(0);
        assert!(render_to_string(&state).contains("Write your code here"));
    }
}
