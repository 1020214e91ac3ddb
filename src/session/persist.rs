//! Durable storage for the active session.
//!
//! One JSON file mirrors the in-memory session: written on login,
//! removed on logout, read once at startup. A missing or corrupt file
//! means "not logged in"; startup never fails because a stale file
//! went bad.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::api::Session;

#[derive(Debug, Error)]
pub enum SessionFileError {
    #[error("Failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove session file '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize session: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the on-disk session copy.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Default location: `<data_dir>/blogdeck/session.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("blogdeck")
            .join("session.json")
    }

    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Use an explicit location instead of the platform default.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session, if any.
    pub fn load(&self) -> Option<Session> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("failed to read session file {}: {}", self.path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(
                    "ignoring corrupt session file {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Write the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<(), SessionFileError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionFileError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|source| SessionFileError::Serialize { source })?;
        fs::write(&self.path, json).map_err(|source| SessionFileError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Remove the stored session. A file that is already gone is fine.
    pub fn clear(&self) -> Result<(), SessionFileError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionFileError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Default for SessionFile {
    fn default() -> Self {
        Self::new()
    }
}
