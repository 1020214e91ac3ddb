//! State for the session store.

use crate::api::{Blog, Session};
use crate::store::StoreState;

/// Authentication state of the client.
///
/// At most one session is active at a time. The durable copy on disk
/// mirrors the `Active` payload and is re-read at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Active(Session),
}

impl StoreState for SessionState {}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Active(session) => Some(session),
            SessionState::Anonymous => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session().map(|session| session.id.as_str())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session().map(|session| session.name.as_str())
    }

    /// Capability check: only the owning account may delete an entry.
    ///
    /// Identity is id equality. Display fields are mutable on the
    /// server and must not participate.
    pub fn can_delete(&self, blog: &Blog) -> bool {
        match (self.user_id(), blog.owner_id()) {
            (Some(user_id), Some(owner_id)) => user_id == owner_id,
            _ => false,
        }
    }
}
