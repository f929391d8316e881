//! Gateway configuration

use std::collections::BTreeMap;

use elodan_domain::endpoints;

/// Default request timeout: 120 seconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Configuration for the request gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL prefixed to relative endpoints.
    pub base_url: String,
    /// Deadline applied to every call unless overridden per request.
    pub timeout_ms: u64,
    /// Headers attached to every request unless overridden by the caller.
    pub default_headers: BTreeMap<String, String>,
    /// Endpoint called to renew the session after a 401.
    pub refresh_endpoint: String,
    /// Path fragments whose 401 responses never trigger a refresh.
    pub refresh_exempt: Vec<String>,
}

impl GatewayConfig {
    /// Creates a configuration with the standard defaults for a base URL:
    /// JSON content type, 120 second timeout, and the auth refresh
    /// endpoint with login/refresh exempt from the 401 handling.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_headers,
            refresh_endpoint: endpoints::auth::REFRESH.to_string(),
            refresh_exempt: vec![
                endpoints::auth::LOGIN.to_string(),
                endpoints::auth::REFRESH.to_string(),
            ],
        }
    }

    /// Overrides the default timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Adds a default header.
    #[must_use]
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Returns true when a 401 from this endpoint is a credential error
    /// rather than session expiry.
    #[must_use]
    pub fn is_refresh_exempt(&self, endpoint: &str) -> bool {
        self.refresh_exempt
            .iter()
            .any(|fragment| endpoint.contains(fragment.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::new("https://api.example.com/api/v1");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(
            config.default_headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(config.refresh_endpoint, "/auth/refresh");
    }

    #[test]
    fn test_refresh_exemptions() {
        let config = GatewayConfig::new("https://api.example.com/api/v1");
        assert!(config.is_refresh_exempt("/auth/login"));
        assert!(config.is_refresh_exempt("/auth/refresh"));
        assert!(config.is_refresh_exempt("https://api.example.com/api/v1/auth/login"));
        assert!(!config.is_refresh_exempt("/chat/sessions"));
    }

    #[test]
    fn test_builders() {
        let config = GatewayConfig::new("https://api.example.com")
            .with_timeout_ms(5_000)
            .with_default_header("X-Client", "elodan");
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(
            config.default_headers.get("X-Client").map(String::as_str),
            Some("elodan")
        );
    }
}
