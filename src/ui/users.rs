//! Users overview popup.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::UserSummary;
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT, POPUP_BORDER};

/// Not a reducer store: the panel is a passive snapshot of the last
/// users response, replaced wholesale on every load.
#[derive(Debug, Clone, Default)]
pub struct UsersPanelState {
    pub users: Vec<UserSummary>,
    pub loading: bool,
}

impl UsersPanelState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn loaded(&mut self, users: Vec<UserSummary>) {
        self.users = users;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }
}

pub struct UsersPanel<'a> {
    state: &'a UsersPanelState,
}

impl<'a> UsersPanel<'a> {
    pub fn new(state: &'a UsersPanelState) -> Self {
        Self { state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut lines = vec![Line::from("")];

        if self.state.loading && self.state.users.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Loading users...",
                Style::default().fg(DIM_TEXT),
            )));
        } else if self.state.users.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No users yet.",
                Style::default().fg(DIM_TEXT),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {:<24}{}", "Name", "Blogs created"),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )));
            for user in &self.state.users {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<24}", user.display_name()),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::styled(
                        user.blog_count().to_string(),
                        Style::default().fg(ACCENT),
                    ),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Esc: Close",
            Style::default().fg(DIM_TEXT),
        )));

        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Users", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        )
    }

    /// Minimum popup size, grown to fit the roster.
    pub fn size(&self) -> (u16, u16) {
        let height = (self.state.users.len() as u16).saturating_add(6).max(7);
        (44, height.min(20))
    }
}
