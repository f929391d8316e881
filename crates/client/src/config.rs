//! Client configuration.

use std::collections::BTreeMap;

use elodan_application::{DEFAULT_TIMEOUT_MS, GatewayConfig};

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "ELODAN_API_URL";

/// Environment variable overriding the request timeout (milliseconds).
pub const ENV_TIMEOUT_MS: &str = "ELODAN_API_TIMEOUT_MS";

/// Default API base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Configuration for [`crate::ElodanClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL prefixed to relative endpoints.
    pub base_url: String,
    /// Per-request deadline in milliseconds.
    pub timeout_ms: u64,
    /// Extra headers attached to every request.
    pub extra_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Creates a configuration for a base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            extra_headers: BTreeMap::new(),
        }
    }

    /// Reads configuration from the environment, falling back to the
    /// local-development defaults.
    ///
    /// Honors [`ENV_BASE_URL`] and [`ENV_TIMEOUT_MS`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_ms = std::env::var(ENV_TIMEOUT_MS)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Self {
            base_url,
            timeout_ms,
            extra_headers: BTreeMap::new(),
        }
    }

    /// Overrides the timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    pub(crate) fn into_gateway_config(self) -> GatewayConfig {
        let mut config = GatewayConfig::new(self.base_url).with_timeout_ms(self.timeout_ms);
        for (name, value) in self.extra_headers {
            config = config.with_default_header(name, value);
        }
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
