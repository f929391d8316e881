//! Request options bag

use std::collections::BTreeMap;

use serde_json::Value;

use super::{HttpMethod, QueryParams, RequestBody};

/// Options for a single gateway request.
///
/// The method defaults to GET; headers are merged over the gateway's
/// defaults with the caller's entries winning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: HttpMethod,
    /// Caller headers, merged over the gateway defaults.
    pub headers: BTreeMap<String, String>,
    /// Query parameters appended to the URL.
    pub query: QueryParams,
    /// Request payload.
    pub body: RequestBody,
    /// Per-request timeout override in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl RequestOptions {
    /// Creates default options (GET, no headers, no body).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header, replacing any previous value for the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn with_json(mut self, value: Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Overrides the timeout for this request only.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}
