//! Reducer for the login form.

use crate::store::Reduce;

use super::action::LoginFormAction;
use super::state::{LoginField, LoginFormState};

pub struct LoginFormReducer;

impl Reduce for LoginFormReducer {
    type State = LoginFormState;
    type Action = LoginFormAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            LoginFormAction::Input { ch } => {
                if !state.submitting {
                    match state.focus {
                        LoginField::Username => state.username.push(ch),
                        LoginField::Password => state.password.push(ch),
                    }
                }
                state
            }
            LoginFormAction::Backspace => {
                if !state.submitting {
                    match state.focus {
                        LoginField::Username => {
                            state.username.pop();
                        }
                        LoginField::Password => {
                            state.password.pop();
                        }
                    }
                }
                state
            }
            LoginFormAction::FocusNext => {
                state.focus = match state.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
                state
            }
            LoginFormAction::Submit => {
                state.submitting = true;
                state
            }
            LoginFormAction::Failed => {
                state.submitting = false;
                state
            }
            LoginFormAction::Reset => LoginFormState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(mut state: LoginFormState, text: &str) -> LoginFormState {
        for ch in text.chars() {
            state = LoginFormReducer::reduce(state, LoginFormAction::Input { ch });
        }
        state
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let state = type_text(LoginFormState::default(), "ada");
        assert_eq!(state.username, "ada");
        assert!(state.password.is_empty());
    }

    #[test]
    fn focus_next_switches_to_password() {
        let state = LoginFormReducer::reduce(LoginFormState::default(), LoginFormAction::FocusNext);
        let state = type_text(state, "secret");
        assert!(state.username.is_empty());
        assert_eq!(state.password, "secret");
    }

    #[test]
    fn focus_next_wraps_back_to_username() {
        let state = LoginFormReducer::reduce(LoginFormState::default(), LoginFormAction::FocusNext);
        let state = LoginFormReducer::reduce(state, LoginFormAction::FocusNext);
        assert_eq!(state.focus, LoginField::Username);
    }

    #[test]
    fn backspace_removes_last_char() {
        let state = type_text(LoginFormState::default(), "adaa");
        let state = LoginFormReducer::reduce(state, LoginFormAction::Backspace);
        assert_eq!(state.username, "ada");
    }

    #[test]
    fn backspace_on_empty_field_is_harmless() {
        let state = LoginFormReducer::reduce(LoginFormState::default(), LoginFormAction::Backspace);
        assert!(state.username.is_empty());
    }

    #[test]
    fn submit_freezes_edits() {
        let state = type_text(LoginFormState::default(), "ada");
        let state = LoginFormReducer::reduce(state, LoginFormAction::Submit);
        assert!(state.submitting);

        let state = type_text(state, "xyz");
        assert_eq!(state.username, "ada");
        let state = LoginFormReducer::reduce(state, LoginFormAction::Backspace);
        assert_eq!(state.username, "ada");
    }

    #[test]
    fn failure_unfreezes_and_keeps_typed_values() {
        let state = type_text(LoginFormState::default(), "ada");
        let state = LoginFormReducer::reduce(state, LoginFormAction::Submit);
        let state = LoginFormReducer::reduce(state, LoginFormAction::Failed);
        assert!(!state.submitting);
        assert_eq!(state.username, "ada");
    }

    #[test]
    fn reset_clears_everything() {
        let state = type_text(LoginFormState::default(), "ada");
        let state = LoginFormReducer::reduce(state, LoginFormAction::FocusNext);
        let state = LoginFormReducer::reduce(state, LoginFormAction::Reset);
        assert_eq!(state, LoginFormState::default());
    }
}
