//! Rendering for the login form.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT, POPUP_BORDER};

use super::state::{LoginField, LoginFormState};

pub struct LoginForm<'a> {
    state: &'a LoginFormState,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a LoginFormState) -> Self {
        Self { state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from(""),
            field_line(
                "Username",
                &self.state.username,
                self.state.focus == LoginField::Username,
                false,
            ),
            Line::from(""),
            field_line(
                "Password",
                &self.state.password,
                self.state.focus == LoginField::Password,
                true,
            ),
            Line::from(""),
            if self.state.submitting {
                Line::from(Span::styled(
                    "  Logging in...",
                    Style::default().fg(DIM_TEXT),
                ))
            } else {
                Line::from(Span::styled(
                    "  Enter: Log in   Tab: Switch field",
                    Style::default().fg(DIM_TEXT),
                ))
            },
        ];

        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Log in", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        )
    }

    /// Minimum popup size the form renders well in.
    pub fn size(&self) -> (u16, u16) {
        (44, 8)
    }
}

fn field_line(label: &str, value: &str, focused: bool, mask: bool) -> Line<'static> {
    let shown = if mask {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let mut spans = vec![
        Span::styled(format!("  {:<9}", label), label_style),
        Span::styled(shown, Style::default().fg(HEADER_TEXT)),
    ];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}
