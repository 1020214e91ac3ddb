//! Reducer for the notification store.

use crate::store::Reduce;

use super::action::NoticeAction;
use super::state::NoticeState;

/// Notices do not stack: showing replaces, hiding resets to the fixed
/// empty state. The seq counter survives every transition so stale
/// expiries stay recognizable.
pub struct NoticeReducer;

impl Reduce for NoticeReducer {
    type State = NoticeState;
    type Action = NoticeAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            NoticeAction::Show {
                message,
                kind,
                duration_ms,
            } => NoticeState {
                message,
                kind,
                duration_ms,
                visible: true,
                seq: state.seq + 1,
            },
            NoticeAction::Hide => NoticeState {
                seq: state.seq,
                ..NoticeState::default()
            },
            NoticeAction::Expired { seq } if seq == state.seq => NoticeState {
                seq: state.seq,
                ..NoticeState::default()
            },
            NoticeAction::Expired { .. } => state,
        }
    }
}
