//! Actions for the notification store.

use crate::store::Action;

use super::state::NoticeKind;

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeAction {
    /// Display a new notice, superseding whatever is on screen.
    Show {
        message: String,
        kind: NoticeKind,
        duration_ms: u64,
    },
    /// Dismiss the current notice immediately.
    Hide,
    /// A scheduled auto-hide fired. Ignored unless `seq` still matches
    /// the notice it was armed for.
    Expired { seq: u64 },
}

impl Action for NoticeAction {}
