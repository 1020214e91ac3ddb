use super::action::ComposeFormAction;
use super::state::{ComposeField, ComposeFormState};
use crate::store::Reduce;

pub struct ComposeFormReducer;

impl ComposeFormReducer {
    fn active_field(state: &mut ComposeFormState) -> &mut String {
        match state.focus {
            ComposeField::Title => &mut state.title,
            ComposeField::Author => &mut state.author,
            ComposeField::Url => &mut state.url,
            ComposeField::Likes => &mut state.likes,
        }
    }
}

impl Reduce for ComposeFormReducer {
    type State = ComposeFormState;
    type Action = ComposeFormAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ComposeFormAction::Input { ch } => {
                // The likes field holds a number; everything else is free text.
                if state.focus == ComposeField::Likes && !ch.is_ascii_digit() {
                    return state;
                }
                if ch.is_control() {
                    return state;
                }
                Self::active_field(&mut state).push(ch);
                state
            }
            ComposeFormAction::Backspace => {
                Self::active_field(&mut state).pop();
                state
            }
            ComposeFormAction::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            ComposeFormAction::FocusPrevious => {
                state.focus = state.focus.previous();
                state
            }
            ComposeFormAction::Reset => ComposeFormState::default(),
        }
    }
}
