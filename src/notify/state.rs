//! State for the notification store.

use crate::store::StoreState;

/// How long a notice stays on screen unless superseded or dismissed.
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 5000;

/// Visual category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    Success,
    Error,
    #[default]
    Info,
}

/// One transient banner message.
///
/// `seq` increases on every show. Scheduled expiries carry the seq they
/// were armed for, so a timer belonging to an older notice can never
/// hide a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeState {
    pub message: String,
    pub kind: NoticeKind,
    pub duration_ms: u64,
    pub visible: bool,
    pub seq: u64,
}

impl Default for NoticeState {
    fn default() -> Self {
        Self {
            message: String::new(),
            kind: NoticeKind::Info,
            duration_ms: DEFAULT_NOTICE_DURATION_MS,
            visible: false,
            seq: 0,
        }
    }
}

impl StoreState for NoticeState {}
