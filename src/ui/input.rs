use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, PopupKind};
use crate::ui::blogs::BlogListAction;
use crate::ui::compose::ComposeFormAction;
use crate::ui::login::LoginFormAction;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if !app.session().is_active() {
        handle_login_key(app, key);
        return;
    }

    if let Some(kind) = app.popup_kind() {
        match kind {
            PopupKind::Compose => handle_compose_key(app, key),
            PopupKind::ConfirmDelete => handle_confirm_delete_key(app, key),
            PopupKind::Users => handle_users_key(app, key),
        }
        return;
    }

    if app.blog_list().editing_filter {
        handle_filter_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_login(LoginFormAction::FocusNext);
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.dispatch_login(LoginFormAction::Backspace),
        KeyCode::Esc => app.dismiss_notice(),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_login(LoginFormAction::Input { ch });
        }
        _ => {}
    }
}

fn handle_compose_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_compose(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_compose(ComposeFormAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_compose(ComposeFormAction::FocusPrevious),
        KeyCode::Enter => app.submit_compose(),
        KeyCode::Backspace => app.dispatch_compose(ComposeFormAction::Backspace),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_compose(ComposeFormAction::Input { ch });
        }
        _ => {}
    }
}

fn handle_confirm_delete_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_pending_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_pending_delete(),
        _ => {}
    }
}

fn handle_users_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('u') | KeyCode::Char('q') => app.close_users(),
        _ => {}
    }
}

/// While the author filter is being edited, every printable key goes
/// into the filter text.
fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.dispatch_blog_list(BlogListAction::EndFilter),
        KeyCode::Backspace => app.dispatch_blog_list(BlogListAction::FilterBackspace),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_blog_list(BlogListAction::FilterInput { ch });
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.dispatch_blog_list(BlogListAction::MoveSelection { delta: -1 });
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.dispatch_blog_list(BlogListAction::MoveSelection { delta: 1 });
        }
        KeyCode::Enter | KeyCode::Char('v') => {
            app.dispatch_blog_list(BlogListAction::ToggleExpand);
        }
        KeyCode::Char('l') => app.like_selected(),
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('n') => app.open_compose(),
        KeyCode::Char('s') => app.dispatch_blog_list(BlogListAction::CycleSort),
        KeyCode::Char('/') => app.dispatch_blog_list(BlogListAction::StartFilter),
        KeyCode::Char('c') => app.dispatch_blog_list(BlogListAction::ClearFilter),
        KeyCode::Char('r') => app.refresh_blogs(),
        KeyCode::Char('u') => app.open_users(),
        KeyCode::Char('o') => app.log_out(),
        KeyCode::Esc | KeyCode::Char('x') => app.dismiss_notice(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}
