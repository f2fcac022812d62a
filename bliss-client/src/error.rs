//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (missing or expired token)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success response
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted client state could not be written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Coarse failure class, used for logging and for deciding what to surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request never completed or came back non-2xx
    Transport,
    /// Body could not be parsed or lacked expected fields
    Malformed,
    /// Token missing, expired or rejected
    Session,
    /// Local persisted state
    Storage,
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Http(e) if e.is_decode() => FailureKind::Malformed,
            ClientError::Http(_)
            | ClientError::Timeout
            | ClientError::NotFound(_)
            | ClientError::Validation(_)
            | ClientError::Internal(_) => FailureKind::Transport,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                FailureKind::Malformed
            }
            ClientError::Unauthorized | ClientError::Forbidden(_) => FailureKind::Session,
            ClientError::Storage(_) => FailureKind::Storage,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
