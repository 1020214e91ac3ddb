//! State for the login form.

use crate::store::StoreState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// True between submit and the backend's answer. Edits are frozen
    /// while set.
    pub submitting: bool,
}

impl StoreState for LoginFormState {}
