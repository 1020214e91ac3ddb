//! Wire types exchanged with the blog backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A blog entry as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub likes: u32,
    /// Owning account. List responses populate the full record; create
    /// responses may carry just the account id.
    #[serde(default)]
    pub user: Option<OwnerRef>,
}

impl Blog {
    /// Id of the owning account, however the backend serialized it.
    pub fn owner_id(&self) -> Option<&str> {
        match &self.user {
            Some(OwnerRef::Populated(owner)) => Some(owner.id.as_str()),
            Some(OwnerRef::Id(id)) => Some(id.as_str()),
            None => None,
        }
    }

    /// Display name of the owning account, when populated.
    pub fn owner_name(&self) -> Option<&str> {
        match &self.user {
            Some(OwnerRef::Populated(owner)) => Some(owner.name.as_str()),
            _ => None,
        }
    }
}

/// Reference to the account that created a blog.
///
/// The backend serializes this either as a populated record or as a
/// bare id string, depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Populated(Owner),
    Id(String),
}

/// Populated owner record attached to list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
}

/// Fields for a new blog entry. The server assigns id and ownership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub likes: u32,
}

/// Partial update for an existing blog. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
}

impl BlogPatch {
    /// Patch that only rewrites the like counter.
    pub fn likes(likes: u32) -> Self {
        Self {
            likes: Some(likes),
            ..Self::default()
        }
    }
}

/// Login payload.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// The password must never reach logs through a stray `{:?}`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// An authenticated session, exactly as the login endpoint returns it.
///
/// The same shape is persisted to disk and restored at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub username: String,
    pub name: String,
    pub token: String,
}

/// Account record from the users endpoint, with the blogs it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub blogs: Vec<BlogStub>,
}

impl UserSummary {
    pub fn blog_count(&self) -> usize {
        self.blogs.len()
    }

    /// Human-facing name, falling back to the username when the
    /// account never set one.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

/// Abbreviated blog reference embedded in a user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogStub {
    pub id: String,
    pub title: String,
}
