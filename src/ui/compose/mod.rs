//! New-blog dialog: form store and rendering.

mod action;
mod form;
mod reducer;
mod state;

pub use action::ComposeFormAction;
pub use form::ComposeForm;
pub use reducer::ComposeFormReducer;
pub use state::{ComposeField, ComposeFormState};
