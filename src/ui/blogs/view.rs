//! Rendering for the blog list.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::session::SessionState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};

use super::state::BlogListState;

pub struct BlogListView<'a> {
    list: &'a BlogListState,
    session: &'a SessionState,
}

impl<'a> BlogListView<'a> {
    pub fn new(list: &'a BlogListState, session: &'a SessionState) -> Self {
        Self { list, session }
    }

    /// Build the list widget. `height` is the rendered area height,
    /// used to keep the cursor scrolled into view.
    pub fn widget(&self, height: u16) -> Paragraph<'static> {
        let dim = Style::default().fg(DIM_TEXT);
        let text = Style::default().fg(HEADER_TEXT);
        let accent = Style::default().fg(ACCENT);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(self.status_line());
        lines.push(Line::from(""));

        let visible = self.list.visible();
        let mut selected_line = 0usize;

        if visible.is_empty() {
            let message = if self.list.loading && self.list.blogs.is_empty() {
                "  Loading blogs..."
            } else if self.list.filter.is_empty() {
                "  No blogs found. Add some blogs!"
            } else {
                "  No blogs match this filter."
            };
            lines.push(Line::from(Span::styled(message.to_string(), dim)));
        }

        for (idx, blog) in visible.iter().enumerate() {
            let is_selected = idx == self.list.selected;
            if is_selected {
                selected_line = lines.len();
            }

            let marker = if is_selected { "▸ " } else { "  " };
            let mut row = Line::from(vec![
                Span::styled(
                    format!("{}{}", marker, blog.title),
                    text.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  by {}", blog.author), dim),
                Span::styled(format!("  ({} likes)", blog.likes), accent),
            ]);
            if is_selected {
                row = row.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            lines.push(row);

            if self.list.expanded.as_deref() == Some(blog.id.as_str()) {
                lines.push(Line::from(vec![
                    Span::styled("      ".to_string(), dim),
                    Span::styled(blog.url.clone(), accent),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(format!("      Likes: {}", blog.likes), text),
                    Span::styled("  (l to like)", dim),
                ]));
                if let Some(owner) = blog.owner_name() {
                    lines.push(Line::from(Span::styled(
                        format!("      Added by {}", owner),
                        text,
                    )));
                }
                if self.session.can_delete(blog) {
                    lines.push(Line::from(Span::styled(
                        "      d: Delete this entry".to_string(),
                        dim,
                    )));
                }
                lines.push(Line::from(""));
            }
        }

        // Keep the selected row inside the viewport.
        let inner_height = height.saturating_sub(2) as usize;
        let scroll = if inner_height > 0 {
            selected_line.saturating_sub(inner_height.saturating_sub(1)) as u16
        } else {
            0
        };

        let title = format!("Blogs ({})", visible.len());
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .title(Span::styled(title, Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }

    fn status_line(&self) -> Line<'static> {
        let dim = Style::default().fg(DIM_TEXT);
        let accent = Style::default().fg(ACCENT);

        let mut spans = vec![
            Span::styled("  sort: ".to_string(), dim),
            Span::styled(self.list.sort.label().to_string(), accent),
            Span::styled("   filter: ".to_string(), dim),
        ];
        if self.list.filter.is_empty() && !self.list.editing_filter {
            spans.push(Span::styled("(none)".to_string(), dim));
        } else {
            spans.push(Span::styled(self.list.filter.clone(), accent));
        }
        if self.list.editing_filter {
            spans.push(Span::styled("█".to_string(), accent));
            spans.push(Span::styled(
                "   Enter: apply  Esc: done".to_string(),
                dim,
            ));
        }
        if self.list.loading {
            spans.push(Span::styled("   refreshing...".to_string(), dim));
        }
        Line::from(spans)
    }
}
