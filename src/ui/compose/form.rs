//! Rendering for the new-blog form.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT, POPUP_BORDER};

use super::state::{ComposeField, ComposeFormState};

pub struct ComposeForm<'a> {
    state: &'a ComposeFormState,
}

impl<'a> ComposeForm<'a> {
    pub fn new(state: &'a ComposeFormState) -> Self {
        Self { state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from(""),
            self.field_line("Title", &self.state.title, ComposeField::Title),
            self.field_line("Author", &self.state.author, ComposeField::Author),
            self.field_line("Url", &self.state.url, ComposeField::Url),
            self.field_line("Likes", &self.state.likes, ComposeField::Likes),
            Line::from(""),
            Line::from(Span::styled(
                "  Enter: Create   Tab: Next field   Esc: Cancel",
                Style::default().fg(DIM_TEXT),
            )),
        ];

        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("New blog", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        )
    }

    /// Minimum popup size the form renders well in.
    pub fn size(&self) -> (u16, u16) {
        (52, 9)
    }

    fn field_line(&self, label: &str, value: &str, field: ComposeField) -> Line<'static> {
        let focused = self.state.focus == field;
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };

        let mut spans = vec![
            Span::styled(format!("  {:<8}", label), label_style),
            Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
        ];
        if focused {
            spans.push(Span::styled(
                "█",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }
}
