//! Notification store: one transient banner, auto-hidden on a timer.

mod action;
mod reducer;
mod state;
mod timer;

pub use action::NoticeAction;
pub use reducer::NoticeReducer;
pub use state::{NoticeKind, NoticeState, DEFAULT_NOTICE_DURATION_MS};
pub use timer::NoticeTimer;
