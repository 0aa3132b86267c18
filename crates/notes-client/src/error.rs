//! Error types for talking to the notes backend.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`crate::NotesApi`] implementations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, undecodable body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A request URL could not be built from the configured base.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }
}
