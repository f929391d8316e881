//! Gateway error types

use serde_json::Value;
use thiserror::Error;

use crate::ports::{TokenStorageError, TransportError};

/// Errors surfaced to gateway callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request or refresh call exceeded the configured deadline.
    ///
    /// Never auto-retried by the gateway; recoverable by caller retry.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The deadline that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// The session could not be renewed after a 401.
    ///
    /// The stored token has been cleared; the caller is expected to route
    /// the user back to sign-in.
    #[error("session expired")]
    SessionExpired,

    /// The server answered with a non-success status other than a
    /// refreshable 401.
    #[error("API error: HTTP {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Parsed error payload; an empty object when the body was not
        /// valid JSON.
        body: Value,
    },

    /// A network-level failure without an HTTP status.
    #[error("transport error: {0}")]
    Transport(TransportError),

    /// The endpoint could not be combined into a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A success response body could not be parsed.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The durable token storage failed.
    #[error("token storage error: {0}")]
    Storage(#[from] TokenStorageError),
}

impl ApiError {
    /// HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::SessionExpired => Some(401),
            _ => None,
        }
    }

    /// Server-provided message from the error payload, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => body.get("message").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Maps a transport failure, promoting deadline overruns to
    /// [`ApiError::Timeout`].
    pub(crate) fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            other => Self::Transport(other),
        }
    }
}

/// Result type alias for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;
