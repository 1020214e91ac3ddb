//! Login screen: form store and rendering.

mod action;
mod form;
mod reducer;
mod state;

pub use action::LoginFormAction;
pub use form::LoginForm;
pub use reducer::LoginFormReducer;
pub use state::{LoginField, LoginFormState};
