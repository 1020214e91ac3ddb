//! Auto-hide scheduling for notices.

use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::events::AppEvent;

/// Arms one auto-hide task per shown notice.
///
/// Arming aborts the previously scheduled task, so at most one expiry
/// is pending at a time. Should an abort lose the race with delivery,
/// the seq carried by the event still keeps the reducer from acting on
/// a stale timer.
pub struct NoticeTimer {
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl NoticeTimer {
    pub fn new(runtime: Handle, events: mpsc::Sender<AppEvent>) -> Self {
        Self {
            runtime,
            events,
            pending: None,
        }
    }

    /// Schedule the auto-hide for the notice carrying `seq`.
    pub fn arm(&mut self, seq: u64, duration: Duration) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let events = self.events.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = events.send(AppEvent::NoticeExpired { seq });
        }));
    }

    /// Drop the pending auto-hide without delivering it.
    pub fn disarm(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
    }
}
