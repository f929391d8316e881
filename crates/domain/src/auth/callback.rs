//! OAuth redirect callback parsing

use url::Url;

use super::AccessToken;
use crate::error::{DomainError, DomainResult};

/// Fallback message when the provider redirects back without a token or an
/// error description.
const DEFAULT_FAILURE_MESSAGE: &str = "Google authentication failed";

/// Outcome of the Google OAuth server-side redirect flow.
///
/// The backend redirects the browser to the app's callback page carrying
/// `accessToken`, `refreshToken`, or `error` in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthCallback {
    /// The provider returned a usable access token.
    Success {
        /// The freshly minted access token.
        access_token: AccessToken,
        /// Refresh token, present only when the backend opts out of the
        /// cookie flow.
        refresh_token: Option<String>,
    },
    /// The provider reported a failure.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

impl OAuthCallback {
    /// Parses the callback outcome from the redirect URL.
    ///
    /// An empty `accessToken` counts as absent.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let mut access_token = None;
        let mut refresh_token = None;
        let mut error = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "accessToken" => access_token = Some(value.into_owned()),
                "refreshToken" => refresh_token = Some(value.into_owned()),
                "error" => error = Some(value.into_owned()),
                _ => {}
            }
        }

        match access_token {
            Some(token) if !token.is_empty() => Self::Success {
                access_token: AccessToken::new(token),
                refresh_token: refresh_token.filter(|t| !t.is_empty()),
            },
            _ => Self::Failed {
                message: error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            },
        }
    }

    /// Parses the callback outcome from a URL string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the string is not a valid URL.
    pub fn parse(url: &str) -> DomainResult<Self> {
        let parsed = Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {url}")))?;
        Ok(Self::from_url(&parsed))
    }

    /// Returns true for the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
