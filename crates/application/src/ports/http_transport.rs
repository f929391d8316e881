//! HTTP transport port

use std::time::Duration;

use async_trait::async_trait;
use elodan_domain::{HttpMethod, RequestBody};
use thiserror::Error;

/// A single outgoing HTTP call, fully resolved by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL, query string included.
    pub url: String,
    /// Header name/value pairs, already merged and filtered.
    pub headers: Vec<(String, String)>,
    /// Request payload.
    pub body: RequestBody,
    /// Deadline for the whole call.
    pub timeout: Duration,
}

impl TransportRequest {
    /// Returns the first header value with the given name,
    /// case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response produced by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Builds a response from a status and a JSON value, for adapters and
    /// tests that assemble responses in memory.
    #[must_use]
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string().into_bytes(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Errors a transport can produce.
///
/// Non-2xx statuses are not errors at this layer; they come back as
/// ordinary responses for the gateway to interpret.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The call exceeded its deadline.
    #[error("timed out after {timeout_ms} ms")]
    Timeout {
        /// The deadline that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// DNS resolution failed.
    #[error("DNS lookup failed for {host}: {message}")]
    Dns {
        /// Host that could not be resolved.
        host: String,
        /// Resolver error text.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The URL was rejected by the transport.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The body could not be built (unreadable file part, bad MIME type).
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for issuing HTTP calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes one HTTP call.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the call cannot complete at the
    /// network level; HTTP error statuses are returned as responses.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
