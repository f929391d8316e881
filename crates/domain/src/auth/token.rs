//! Access token handling

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque bearer access token.
///
/// `Debug` and `Display` render a redacted preview so tokens never leak
/// into logs; use [`AccessToken::as_str`] for header construction.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Returns a preview of the token (first few chars) for log output.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.0.len() > 12 {
            format!("{}...", &self.0[..8])
        } else {
            self.0.clone()
        }
    }

    /// Returns true for the empty token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for AccessToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for AccessToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken({})", self.preview())
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.preview())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bearer_header() {
        let token = AccessToken::new("abc123");
        assert_eq!(token.bearer_header(), "Bearer abc123");
    }

    #[test]
    fn test_preview_truncates_long_tokens() {
        let token = AccessToken::new("abcdefghijklmnop");
        assert_eq!(token.preview(), "abcdefgh...");
    }

    #[test]
    fn test_preview_keeps_short_tokens() {
        let token = AccessToken::new("short");
        assert_eq!(token.preview(), "short");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AccessToken::new("supersecrettokenvalue");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("secrettokenvalue"));
        assert!(rendered.contains("supersec"));
    }
}
