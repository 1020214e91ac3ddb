//! Session store: who is logged in, mirrored to durable storage.

mod action;
mod persist;
mod reducer;
mod state;

pub use action::SessionAction;
pub use persist::{SessionFile, SessionFileError};
pub use reducer::SessionReducer;
pub use state::SessionState;
