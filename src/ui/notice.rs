use crate::notify::{NoticeKind, NoticeState};
use crate::ui::theme::{DIM_TEXT, NOTICE_ERROR, NOTICE_INFO, NOTICE_SUCCESS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Banner rendered across the top of the body while a notice is up.
pub struct NoticeBanner<'a> {
    state: &'a NoticeState,
}

impl<'a> NoticeBanner<'a> {
    pub fn new(state: &'a NoticeState) -> Self {
        Self { state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let color = match self.state.kind {
            NoticeKind::Success => NOTICE_SUCCESS,
            NoticeKind::Error => NOTICE_ERROR,
            NoticeKind::Info => NOTICE_INFO,
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {}", self.state.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Esc to dismiss)", Style::default().fg(DIM_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }
}
