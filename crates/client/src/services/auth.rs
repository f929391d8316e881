//! Account authentication operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::User;
use elodan_domain::{AccessToken, DomainError, OAuthCallback, endpoints};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;

use super::field_or_self;

/// Payload for account registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Display name.
    pub name: String,
}

/// Parsed outcome of a login/register/refresh call.
///
/// The backend nests the payload under `data` but some deployments return
/// it flat; both shapes are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    /// Whether the server reported success.
    pub success: Option<bool>,
    /// Server message, when present.
    pub message: Option<String>,
    /// Freshly minted access token, when the call produces one.
    pub access_token: Option<AccessToken>,
    /// The authenticated user, when the call returns one.
    pub user: Option<User>,
}

impl AuthResponse {
    fn from_value(value: &Value) -> Self {
        let data = value.get("data").unwrap_or(value);
        let access_token = data
            .get("accessToken")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .or_else(|| {
                value
                    .get("accessToken")
                    .and_then(Value::as_str)
                    .filter(|t| !t.is_empty())
            })
            .map(AccessToken::new);
        let user = data
            .get("user")
            .or_else(|| value.get("user"))
            .and_then(|u| serde_json::from_value(u.clone()).ok());
        Self {
            success: value.get("success").and_then(Value::as_bool),
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(String::from),
            access_token,
            user,
        }
    }
}

/// Authentication API wrapper.
pub struct AuthService {
    gateway: Arc<ApiGateway>,
}

impl AuthService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors; a 409 means the email is taken.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let value: Value = self
            .gateway
            .post(
                endpoints::auth::REGISTER,
                serde_json::to_value(request).unwrap_or_default(),
            )
            .await?;
        Ok(AuthResponse::from_value(&value))
    }

    /// Logs in with email and password, storing the returned token.
    ///
    /// A 401 here is a credential error and is surfaced as
    /// [`elodan_application::ApiError::Api`], never as session expiry.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let value: Value = self
            .gateway
            .post(
                endpoints::auth::LOGIN,
                json!({"email": email, "password": password}),
            )
            .await?;
        let response = AuthResponse::from_value(&value);
        if let Some(token) = &response.access_token {
            self.gateway.set_token(token.clone()).await?;
        }
        Ok(response)
    }

    /// Logs out on the server (best effort) and always clears the local
    /// token.
    ///
    /// # Errors
    ///
    /// Returns [`elodan_application::ApiError::Storage`] only when the
    /// local token cannot be cleared; server failures are logged and
    /// swallowed.
    pub async fn logout(&self) -> ApiResult<()> {
        if let Err(err) = self.gateway.post_empty::<Value>(endpoints::auth::LOGOUT).await {
            warn!(error = %err, "server logout failed");
        }
        self.gateway.clear_token().await
    }

    /// Logs out every session of the account, then clears the local
    /// token.
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthService::logout`].
    pub async fn logout_all(&self) -> ApiResult<()> {
        if let Err(err) = self
            .gateway
            .post_empty::<Value>(endpoints::auth::LOGOUT_ALL)
            .await
        {
            warn!(error = %err, "server logout-all failed");
        }
        self.gateway.clear_token().await
    }

    /// Explicitly renews the session using the refresh cookie.
    ///
    /// The gateway already refreshes transparently on 401; this is for
    /// hosts that want to renew eagerly (e.g. on startup).
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn refresh(&self) -> ApiResult<AuthResponse> {
        let value: Value = self
            .gateway
            .post(endpoints::auth::REFRESH, json!({}))
            .await?;
        let response = AuthResponse::from_value(&value);
        if let Some(token) = &response.access_token {
            self.gateway.set_token(token.clone()).await?;
        }
        Ok(response)
    }

    /// Requests a password-reset email.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn request_password_reset(&self, email: &str) -> ApiResult<Value> {
        self.gateway
            .post(
                endpoints::auth::RESET_PASSWORD_REQUEST,
                json!({"email": email}),
            )
            .await
    }

    /// Confirms a password reset with the emailed token.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> ApiResult<Value> {
        self.gateway
            .post(
                endpoints::auth::RESET_PASSWORD_CONFIRM,
                json!({"token": token, "newPassword": new_password}),
            )
            .await
    }

    /// Fetches the authenticated user.
    ///
    /// Used on startup to reconstruct session state from the stored
    /// token; a [`elodan_application::ApiError::SessionExpired`] here
    /// means sign-in is required.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn current_user(&self) -> ApiResult<User> {
        let value: Value = self.gateway.get(endpoints::auth::ME).await?;
        super::decode_raw(field_or_self(elodan_domain::unwrap_data(value), "user"))
    }

    /// Returns the URL the browser should navigate to for the Google
    /// OAuth redirect flow.
    #[must_use]
    pub fn google_login_url(&self) -> String {
        format!(
            "{}{}",
            self.gateway.config().base_url,
            endpoints::auth::GOOGLE
        )
    }

    /// Exchanges a Google authorization code for a session, storing the
    /// returned token.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn login_with_google(&self, code: &str) -> ApiResult<AuthResponse> {
        let value: Value = self
            .gateway
            .post(endpoints::auth::GOOGLE, json!({"code": code}))
            .await?;
        let response = AuthResponse::from_value(&value);
        if let Some(token) = &response.access_token {
            self.gateway.set_token(token.clone()).await?;
        }
        Ok(response)
    }

    /// Completes the OAuth redirect flow from the callback URL the
    /// browser landed on, storing the token on success.
    ///
    /// # Errors
    ///
    /// Returns [`elodan_application::ApiError::InvalidUrl`] for a
    /// malformed callback URL, or [`elodan_application::ApiError::Storage`]
    /// when the token cannot be persisted.
    pub async fn complete_oauth_callback(&self, callback_url: &str) -> ApiResult<OAuthCallback> {
        let callback = OAuthCallback::parse(callback_url).map_err(|err| match err {
            DomainError::InvalidUrl(message) => {
                elodan_application::ApiError::InvalidUrl(message)
            }
            other => elodan_application::ApiError::InvalidUrl(other.to_string()),
        })?;
        if let OAuthCallback::Success { access_token, .. } = &callback {
            self.gateway.set_token(access_token.clone()).await?;
        }
        Ok(callback)
    }
}
