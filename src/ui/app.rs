use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::api::Session;
use crate::config::ConfigStore;
use crate::notify::{NoticeAction, NoticeKind, NoticeReducer, NoticeState, NoticeTimer};
use crate::session::{SessionAction, SessionReducer, SessionState};
use crate::store::Reduce;
use crate::ui::blogs::{BlogListAction, BlogListReducer, BlogListState};
use crate::ui::compose::{ComposeFormAction, ComposeFormReducer, ComposeFormState};
use crate::ui::events::AppEvent;
use crate::ui::login::{LoginFormAction, LoginFormReducer, LoginFormState};
use crate::ui::users::UsersPanelState;
use crate::worker::Command;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Compose,
    ConfirmDelete,
    Users,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Popup(PopupKind),
}

/// Entry the delete confirmation is about.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteTarget {
    pub id: String,
    pub title: String,
}

pub type CommandSender = mpsc::Sender<Command>;

/// Generic store dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_store {
    ($self:expr, $field:ident, $reducer:ty, $action:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $action);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    config: ConfigStore,
    /// Who is logged in (reducer store).
    session: SessionState,
    /// The transient banner (reducer store).
    notice: NoticeState,
    /// Login screen fields (reducer store).
    login_form: LoginFormState,
    /// The collection as presented (reducer store).
    blog_list: BlogListState,
    /// New-blog dialog fields (reducer store).
    compose_form: ComposeFormState,
    users_panel: UsersPanelState,
    pending_delete: Option<DeleteTarget>,
    commands: Option<CommandSender>,
    /// Auto-hide scheduling (resource, managed outside the reducers).
    notice_timer: Option<NoticeTimer>,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            config,
            session: SessionState::default(),
            notice: NoticeState::default(),
            login_form: LoginFormState::default(),
            blog_list: BlogListState::default(),
            compose_form: ComposeFormState::default(),
            users_panel: UsersPanelState::default(),
            pending_delete: None,
            commands: None,
            notice_timer: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn notice(&self) -> &NoticeState {
        &self.notice
    }

    pub fn login_form(&self) -> &LoginFormState {
        &self.login_form
    }

    pub fn blog_list(&self) -> &BlogListState {
        &self.blog_list
    }

    pub fn compose_form(&self) -> &ComposeFormState {
        &self.compose_form
    }

    pub fn users_panel(&self) -> &UsersPanelState {
        &self.users_panel
    }

    pub fn pending_delete(&self) -> Option<&DeleteTarget> {
        self.pending_delete.as_ref()
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::List => None,
        }
    }

    pub fn set_command_sender(&mut self, sender: CommandSender) {
        self.commands = Some(sender);
    }

    pub fn set_notice_timer(&mut self, timer: NoticeTimer) {
        self.notice_timer = Some(timer);
    }

    // ========================================================================
    // Store dispatch
    // ========================================================================

    fn dispatch_session(&mut self, action: SessionAction) {
        dispatch_store!(self, session, SessionReducer, action);
    }

    fn dispatch_notice(&mut self, action: NoticeAction) {
        dispatch_store!(self, notice, NoticeReducer, action);
    }

    pub fn dispatch_login(&mut self, action: LoginFormAction) {
        dispatch_store!(self, login_form, LoginFormReducer, action);
    }

    pub fn dispatch_blog_list(&mut self, action: BlogListAction) {
        dispatch_store!(self, blog_list, BlogListReducer, action);
    }

    pub fn dispatch_compose(&mut self, action: ComposeFormAction) {
        dispatch_store!(self, compose_form, ComposeFormReducer, action);
    }

    // ========================================================================
    // Notices
    // ========================================================================

    /// Show a notice and arm its auto-hide.
    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) {
        let duration_ms = self.config.get().ui.notice_duration_ms;
        self.dispatch_notice(NoticeAction::Show {
            message: message.into(),
            kind,
            duration_ms,
        });
        if let Some(timer) = &mut self.notice_timer {
            timer.arm(self.notice.seq, Duration::from_millis(duration_ms));
        }
    }

    /// Dismiss the current notice without waiting for the timer.
    pub fn dismiss_notice(&mut self) {
        self.dispatch_notice(NoticeAction::Hide);
        if let Some(timer) = &mut self.notice_timer {
            timer.disarm();
        }
    }

    // ========================================================================
    // Worker outcomes
    // ========================================================================

    /// Fold a worker outcome (or timer expiry) into the stores.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            // Input, Tick and Resize are routed by the event loop.
            AppEvent::Input(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
            AppEvent::LoginDone(Ok(session)) => {
                self.dispatch_login(LoginFormAction::Reset);
                self.dispatch_session(SessionAction::LogIn { session });
                self.dispatch_blog_list(BlogListAction::Loading);
                self.notify("Login successful!", NoticeKind::Success);
            }
            AppEvent::LoginDone(Err(err)) => {
                self.dispatch_login(LoginFormAction::Failed);
                let message = if err.is_unauthorized() {
                    "Invalid username or password".to_string()
                } else {
                    format!("Login failed: {}", err)
                };
                self.notify(message, NoticeKind::Error);
            }
            AppEvent::BlogsLoaded(Ok(blogs)) => {
                self.dispatch_blog_list(BlogListAction::Loaded { blogs });
            }
            AppEvent::BlogsLoaded(Err(err)) => {
                self.dispatch_blog_list(BlogListAction::LoadFailed);
                self.notify(format!("Failed to load blogs: {}", err), NoticeKind::Error);
            }
            AppEvent::BlogCreated(Ok(blog)) => {
                self.notify(format!("Added blog: {}", blog.title), NoticeKind::Success);
            }
            AppEvent::BlogCreated(Err(_)) => {
                self.notify("Error creating blog", NoticeKind::Error);
            }
            AppEvent::BlogUpdated(Ok(_)) => {
                self.notify("Liked!", NoticeKind::Success);
            }
            AppEvent::BlogUpdated(Err(_)) => {
                self.notify("Error updating likes", NoticeKind::Error);
            }
            AppEvent::BlogDeleted { title, outcome } => match outcome {
                Ok(()) => self.notify(format!("Deleted blog: {}", title), NoticeKind::Success),
                Err(_) => self.notify("Error deleting blog", NoticeKind::Error),
            },
            AppEvent::UsersLoaded(Ok(users)) => {
                self.users_panel.loaded(users);
            }
            AppEvent::UsersLoaded(Err(err)) => {
                self.users_panel.load_failed();
                self.notify(format!("Failed to load users: {}", err), NoticeKind::Error);
            }
            AppEvent::NoticeExpired { seq } => {
                self.dispatch_notice(NoticeAction::Expired { seq });
            }
        }
    }

    // ========================================================================
    // User intents
    // ========================================================================

    /// Seed the session from the durable copy found at startup.
    pub fn restore_session(&mut self, session: Session) {
        self.dispatch_session(SessionAction::LogIn { session });
        self.dispatch_blog_list(BlogListAction::Loading);
        self.send_command(Command::LoadBlogs);
    }

    pub fn submit_login(&mut self) {
        if self.login_form.submitting {
            return;
        }
        let username = self.login_form.username.trim().to_string();
        let password = self.login_form.password.trim().to_string();
        if username.is_empty() || password.is_empty() {
            self.notify("Username and password are required", NoticeKind::Error);
            return;
        }
        self.dispatch_login(LoginFormAction::Submit);
        self.send_command(Command::LogIn { username, password });
    }

    pub fn log_out(&mut self) {
        self.dispatch_session(SessionAction::LogOut);
        self.dispatch_blog_list(BlogListAction::Reset);
        self.dispatch_login(LoginFormAction::Reset);
        self.dispatch_compose(ComposeFormAction::Reset);
        self.users_panel = UsersPanelState::default();
        self.pending_delete = None;
        self.focus = Focus::List;
        self.send_command(Command::LogOut);
        self.notify("Logged out successfully", NoticeKind::Success);
    }

    pub fn refresh_blogs(&mut self) {
        self.dispatch_blog_list(BlogListAction::Loading);
        self.send_command(Command::RefreshBlogs);
    }

    pub fn open_compose(&mut self) {
        self.focus = Focus::Popup(PopupKind::Compose);
    }

    pub fn close_compose(&mut self) {
        // Typed values stay put for the next open; submit clears them.
        self.focus = Focus::List;
    }

    /// Send the draft if it validates. The dialog closes right away;
    /// the outcome arrives later as a notice.
    pub fn submit_compose(&mut self) {
        let Some(draft) = self.compose_form.draft() else {
            self.notify("Title, author and url are required", NoticeKind::Error);
            return;
        };
        if self.send_command(Command::CreateBlog { draft }) {
            self.dispatch_compose(ComposeFormAction::Reset);
            self.focus = Focus::List;
        }
    }

    pub fn like_selected(&mut self) {
        let Some((id, likes)) = self
            .blog_list
            .selected_blog()
            .map(|blog| (blog.id.clone(), blog.likes))
        else {
            return;
        };
        self.send_command(Command::LikeBlog { id, likes });
    }

    /// Ask for confirmation before deleting the selected entry. Only
    /// the owning account gets the dialog.
    pub fn request_delete_selected(&mut self) {
        let Some((target, allowed)) = self.blog_list.selected_blog().map(|blog| {
            (
                DeleteTarget {
                    id: blog.id.clone(),
                    title: blog.title.clone(),
                },
                self.session.can_delete(blog),
            )
        }) else {
            return;
        };
        if !allowed {
            self.notify("Only the creator can delete a blog", NoticeKind::Info);
            return;
        }
        self.pending_delete = Some(target);
        self.focus = Focus::Popup(PopupKind::ConfirmDelete);
    }

    pub fn confirm_pending_delete(&mut self) {
        let Some(target) = self.pending_delete.clone() else {
            self.focus = Focus::List;
            return;
        };
        if self.send_command(Command::DeleteBlog {
            id: target.id,
            title: target.title,
        }) {
            self.pending_delete = None;
            self.focus = Focus::List;
        }
    }

    pub fn cancel_pending_delete(&mut self) {
        self.pending_delete = None;
        self.focus = Focus::List;
    }

    pub fn open_users(&mut self) {
        self.users_panel.begin_loading();
        self.focus = Focus::Popup(PopupKind::Users);
        self.send_command(Command::LoadUsers);
    }

    pub fn close_users(&mut self) {
        self.focus = Focus::List;
    }

    fn send_command(&mut self, command: Command) -> bool {
        let Some(sender) = self.commands.clone() else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                warn!("worker command dropped: {}", err);
                self.notify("Backend worker unavailable", NoticeKind::Error);
                false
            }
        }
    }
}
