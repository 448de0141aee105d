//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme;

/// Header widget displaying the app title and panel shortcuts
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = Line::from(vec![
            Span::styled(" PythonPal 🐍", theme::title()),
            Span::raw("   "),
            Span::styled("[", theme::dim()),
            Span::styled("Ctrl+P", theme::key_hint()),
            Span::styled("] Playground  ", theme::dim()),
            Span::styled("[", theme::dim()),
            Span::styled("Ctrl+O", theme::key_hint()),
            Span::styled("] Settings  ", theme::dim()),
            Span::styled("[", theme::dim()),
            Span::styled("Tab", theme::key_hint()),
            Span::styled("] Focus  ", theme::dim()),
            Span::styled("[", theme::dim()),
            Span::styled("q", theme::key_hint()),
            Span::styled("] Quit", theme::dim()),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_header_renders_title_and_shortcuts() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| frame.render_widget(Header::new(), frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("PythonPal"));
        assert!(content.contains("Ctrl+P"));
        assert!(content.contains("Ctrl+O"));
    }
}
