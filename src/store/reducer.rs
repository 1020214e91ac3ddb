//! Reducer trait binding a state type to its actions.

use super::action::Action;
use super::state::StoreState;

/// A store's transition function.
///
/// The reducer is the only place state changes. It must stay pure: side
/// effects (network calls, timers, persistence) happen around the
/// dispatch, never inside it.
pub trait Reduce {
    type State: StoreState;
    type Action: Action;

    /// Apply one action and return the successor state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
