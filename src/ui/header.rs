use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, server: &str, user: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let accent_style = Style::default().fg(ACCENT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let who = match user {
            Some(name) => format!("{} logged in", name),
            None => "not logged in".to_string(),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("blogdeck", accent_style),
            Span::styled("  │  ", separator_style),
            Span::styled(server.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(who, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
