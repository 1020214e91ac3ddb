//! Reducer for the session store.

use crate::store::Reduce;

use super::action::SessionAction;
use super::state::SessionState;

pub struct SessionReducer;

impl Reduce for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            SessionAction::LogIn { session } => SessionState::Active(session),
            SessionAction::LogOut => SessionState::Anonymous,
        }
    }
}
