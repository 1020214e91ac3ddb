use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, PopupKind};
use crate::ui::blogs::BlogListView;
use crate::ui::compose::ComposeForm;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{banner_split, centered_rect_by_size, layout_regions};
use crate::ui::login::LoginForm;
use crate::ui::notice::NoticeBanner;
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT, POPUP_BORDER};
use crate::ui::users::UsersPanel;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let config = app.config().get();
    frame.render_widget(
        Header::new().widget(&config.server.base_url, app.session().display_name()),
        header,
    );
    frame.render_widget(
        Footer::new().widget(footer, app.session().is_active()),
        footer,
    );

    let (banner, content) = banner_split(body, app.notice().visible);
    if let Some(banner) = banner {
        frame.render_widget(NoticeBanner::new(app.notice()).widget(), banner);
    }

    if !app.session().is_active() {
        let form = LoginForm::new(app.login_form());
        let (width, height) = form.size();
        let area = centered_rect_by_size(content, width, height);
        frame.render_widget(Clear, area);
        frame.render_widget(form.widget(), area);
        return;
    }

    frame.render_widget(
        BlogListView::new(app.blog_list(), app.session()).widget(content.height),
        content,
    );

    match app.popup_kind() {
        Some(PopupKind::Compose) => {
            let form = ComposeForm::new(app.compose_form());
            let (width, height) = form.size();
            let area = centered_rect_by_size(content, width, height);
            frame.render_widget(Clear, area);
            frame.render_widget(form.widget(), area);
        }
        Some(PopupKind::ConfirmDelete) => draw_confirm_delete(frame, app, content),
        Some(PopupKind::Users) => {
            let panel = UsersPanel::new(app.users_panel());
            let (width, height) = panel.size();
            let area = centered_rect_by_size(content, width, height);
            frame.render_widget(Clear, area);
            frame.render_widget(panel.widget(), area);
        }
        None => {}
    }
}

fn draw_confirm_delete(frame: &mut Frame<'_>, app: &App, content: ratatui::layout::Rect) {
    let Some(target) = app.pending_delete() else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Delete blog '{}'?", target.title),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  y/Enter: Delete   n/Esc: Cancel",
            Style::default().fg(DIM_TEXT),
        )),
    ];

    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4) as u16;
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(content, width.max(36), height);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Confirm delete", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
