//! Actions for the session store.

use crate::api::Session;
use crate::store::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// A login succeeded (or a stored session was restored at startup).
    LogIn { session: Session },
    /// Return to the anonymous state.
    LogOut,
}

impl Action for SessionAction {}
