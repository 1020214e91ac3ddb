use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tracing::warn;

use crate::api::{ApiError, Blog, Session, UserSummary};
use crate::cache::CacheResult;

/// Everything the view loop reacts to: terminal input, the tick, and
/// outcomes delivered by the background worker.
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Outcome of a login attempt.
    LoginDone(Result<Session, Arc<ApiError>>),
    /// The blog collection as the cache currently serves it.
    BlogsLoaded(CacheResult<Vec<Blog>>),
    /// Outcome of creating a blog.
    BlogCreated(CacheResult<Blog>),
    /// Outcome of a like.
    BlogUpdated(CacheResult<Blog>),
    /// Outcome of a delete. `title` names the entry for the notice.
    BlogDeleted {
        title: String,
        outcome: CacheResult<()>,
    },
    /// Accounts with their blog counts.
    UsersLoaded(CacheResult<Vec<UserSummary>>),
    /// A scheduled notice auto-hide fired.
    NoticeExpired { seq: u64 },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            warn!("terminal read failed: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {
                        // Poll timed out, fall through to the tick check.
                    }
                    Err(err) => {
                        warn!("terminal poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender handed to the worker and the notice timer so their
    /// outcomes enter the same queue as terminal input.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
