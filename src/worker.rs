//! Background worker bridging view commands to the backend.
//!
//! The view loop is synchronous; every network interaction travels
//! through here. Each command runs in its own task, so independent
//! mutations resolve in whatever order the network dictates and a slow
//! request never blocks the next one. Outcomes flow back to the view
//! loop as [`AppEvent`]s.

use std::sync::mpsc;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{ApiClient, BlogDraft, BlogPatch, Credentials};
use crate::cache::BlogCache;
use crate::session::SessionFile;
use crate::ui::events::AppEvent;

/// What the view can ask the worker to do.
#[derive(Debug)]
pub enum Command {
    LogIn { username: String, password: String },
    LogOut,
    LoadBlogs,
    RefreshBlogs,
    CreateBlog { draft: BlogDraft },
    LikeBlog { id: String, likes: u32 },
    DeleteBlog { id: String, title: String },
    LoadUsers,
}

pub struct Worker {
    api: Arc<ApiClient>,
    cache: Arc<BlogCache>,
    session_file: SessionFile,
    events: mpsc::Sender<AppEvent>,
}

impl Worker {
    pub fn new(
        api: Arc<ApiClient>,
        cache: Arc<BlogCache>,
        session_file: SessionFile,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            api,
            cache,
            session_file,
            events,
        }
    }

    /// Drain commands until the view side hangs up.
    pub async fn run(self, mut commands: tokio::sync::mpsc::Receiver<Command>) {
        let worker = Arc::new(self);
        while let Some(command) = commands.recv().await {
            let worker = Arc::clone(&worker);
            tokio::spawn(async move {
                worker.handle(command).await;
            });
        }
        debug!("command channel closed, worker stopping");
    }

    async fn handle(&self, command: Command) {
        match command {
            Command::LogIn { username, password } => {
                let credentials = Credentials { username, password };
                match self.api.login(&credentials).await {
                    Ok(session) => {
                        self.api.set_token(Some(session.token.clone()));
                        if let Err(err) = self.session_file.save(&session) {
                            warn!("failed to persist session: {}", err);
                        }
                        self.cache.invalidate();
                        self.emit(AppEvent::LoginDone(Ok(session)));
                        self.reload_blogs().await;
                    }
                    Err(err) => self.emit(AppEvent::LoginDone(Err(Arc::new(err)))),
                }
            }
            Command::LogOut => {
                self.api.set_token(None);
                if let Err(err) = self.session_file.clear() {
                    warn!("failed to clear stored session: {}", err);
                }
                self.cache.invalidate();
            }
            Command::LoadBlogs => self.reload_blogs().await,
            Command::RefreshBlogs => {
                self.cache.invalidate();
                self.reload_blogs().await;
            }
            Command::CreateBlog { draft } => {
                let outcome = self.cache.create(&draft).await;
                let succeeded = outcome.is_ok();
                self.emit(AppEvent::BlogCreated(outcome));
                if succeeded {
                    self.reload_blogs().await;
                }
            }
            Command::LikeBlog { id, likes } => {
                let patch = BlogPatch::likes(likes.saturating_add(1));
                let outcome = self.cache.update(&id, &patch).await;
                let succeeded = outcome.is_ok();
                self.emit(AppEvent::BlogUpdated(outcome));
                if succeeded {
                    self.reload_blogs().await;
                }
            }
            Command::DeleteBlog { id, title } => {
                let outcome = self.cache.delete(&id).await;
                let succeeded = outcome.is_ok();
                self.emit(AppEvent::BlogDeleted { title, outcome });
                if succeeded {
                    self.reload_blogs().await;
                }
            }
            Command::LoadUsers => {
                let outcome = self.api.list_users().await.map_err(Arc::new);
                self.emit(AppEvent::UsersLoaded(outcome));
            }
        }
    }

    /// Push the current collection to the view. After a create this
    /// refetches (the cache went stale); after an update or delete it
    /// is a cache hit, since the entry was already patched in place.
    async fn reload_blogs(&self) {
        self.emit(AppEvent::BlogsLoaded(self.cache.fetch_all().await));
    }

    fn emit(&self, event: AppEvent) {
        if self.events.send(event).is_err() {
            debug!("event loop gone, dropping worker event");
        }
    }
}
