//! Actions for the login form.

use crate::store::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginFormAction {
    /// Type one character into the focused field.
    Input { ch: char },
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus to the other field.
    FocusNext,
    /// The credentials went out to the backend.
    Submit,
    /// The backend rejected the attempt; typed values stay put.
    Failed,
    /// Clear everything (after a successful login).
    Reset,
}

impl Action for LoginFormAction {}
