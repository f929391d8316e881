//! Elodan client composition root.

use std::sync::Arc;

use elodan_application::{ApiError, ApiGateway, ApiResult, HttpTransport, MemoryTokenStore, TokenStorage};
use elodan_domain::AccessToken;
use elodan_infrastructure::ReqwestTransport;

use crate::config::ClientConfig;
use crate::services::{
    AuthService, ChatService, ImageService, OfferService, SubscriptionService, UserService,
    VideoEffectService, VideoService, VoiceService,
};

/// Entry point to the Elodan API.
///
/// Owns the authenticated request gateway and hands out per-resource
/// services that share it. Cloning the client is cheap; all clones share
/// the same token slot and refresh coordination.
#[derive(Clone)]
pub struct ElodanClient {
    gateway: Arc<ApiGateway>,
}

impl ElodanClient {
    /// Creates a client with in-memory token storage.
    ///
    /// The session does not survive the process; use
    /// [`ElodanClient::with_storage`] with a
    /// [`elodan_infrastructure::FileTokenStore`] for durable sessions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::with_storage(config, Arc::new(MemoryTokenStore::new()))
    }

    /// Creates a client with caller-supplied token storage.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn with_storage(
        config: ClientConfig,
        tokens: Arc<dyn TokenStorage>,
    ) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new().map_err(ApiError::Transport)?;
        Ok(Self::with_parts(config, Arc::new(transport), tokens))
    }

    /// Wires a client from explicit parts.
    ///
    /// Intended for tests and hosts that bring their own transport.
    #[must_use]
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStorage>,
    ) -> Self {
        let gateway = ApiGateway::new(config.into_gateway_config(), transport, tokens);
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Returns a handle to the underlying gateway.
    #[must_use]
    pub fn gateway(&self) -> Arc<ApiGateway> {
        Arc::clone(&self.gateway)
    }

    /// Stores the access token, e.g. from an OAuth callback handled by
    /// the host application.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the token cannot be persisted.
    pub async fn set_token(&self, token: AccessToken) -> ApiResult<()> {
        self.gateway.set_token(token).await
    }

    /// Returns the currently held token, if any.
    pub async fn token(&self) -> Option<AccessToken> {
        self.gateway.token().await
    }

    /// Clears the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the token cannot be cleared.
    pub async fn clear_token(&self) -> ApiResult<()> {
        self.gateway.clear_token().await
    }

    /// Authentication operations.
    #[must_use]
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.gateway())
    }

    /// Profile operations.
    #[must_use]
    pub fn users(&self) -> UserService {
        UserService::new(self.gateway())
    }

    /// Chat sessions and messages.
    #[must_use]
    pub fn chat(&self) -> ChatService {
        ChatService::new(self.gateway())
    }

    /// Image generation.
    #[must_use]
    pub fn images(&self) -> ImageService {
        ImageService::new(self.gateway())
    }

    /// Video generation.
    #[must_use]
    pub fn videos(&self) -> VideoService {
        VideoService::new(self.gateway())
    }

    /// Video effect templates.
    #[must_use]
    pub fn video_effects(&self) -> VideoEffectService {
        VideoEffectService::new(self.gateway())
    }

    /// Voice generation.
    #[must_use]
    pub fn voice(&self) -> VoiceService {
        VoiceService::new(self.gateway())
    }

    /// Plans, subscriptions and bundles.
    #[must_use]
    pub fn subscriptions(&self) -> SubscriptionService {
        SubscriptionService::new(self.gateway())
    }

    /// Promotional offers.
    #[must_use]
    pub fn offers(&self) -> OfferService {
        OfferService::new(self.gateway())
    }
}
