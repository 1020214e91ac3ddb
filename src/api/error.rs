//! Error types for the REST client.

use thiserror::Error;

/// Failure modes of a backend request, in the order the client can
/// distinguish them: rejected auth, an error status with a body, and
/// the three transport-level cases.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials rejected or token missing/expired (HTTP 401/403).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-success status from the backend.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Transport failure before a response arrived.
    #[error("connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The response body did not match the expected shape.
    #[error("malformed response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// An in-flight fetch was abandoned before it resolved.
    #[error("request was interrupted before completing")]
    Interrupted,
}

impl ApiError {
    /// Classify a transport error from the HTTP client.
    pub(crate) fn transport(source: reqwest::Error, timeout_seconds: u64) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                seconds: timeout_seconds,
            }
        } else {
            ApiError::Connection { source }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}
