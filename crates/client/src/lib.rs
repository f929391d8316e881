//! Elodan API client.
//!
//! An async client SDK for the Elodan AI content platform: chat, image,
//! video, voice and video-effect generation, plus account, subscription
//! and offer management.
//!
//! The heart of the crate is the authenticated request gateway
//! ([`elodan_application::ApiGateway`]): every service call goes through
//! it and gets bearer-token attachment, a 120 second deadline, and
//! transparent single-flight session refresh on 401.
//!
//! ```no_run
//! use elodan_client::{ClientConfig, ElodanClient};
//!
//! # async fn run() -> Result<(), elodan_client::ApiError> {
//! let client = ElodanClient::new(ClientConfig::from_env())?;
//! client.auth().login("ada@example.com", "hunter2").await?;
//! let sessions = client.chat().sessions().await?;
//! # let _ = sessions;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod services;

pub use client::ElodanClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_TIMEOUT_MS};

pub use elodan_application::{ApiError, ApiGateway, ApiResult, GatewayConfig, MemoryTokenStore};
pub use elodan_domain::{
    AccessToken, FormData, OAuthCallback, QueryParams, RequestOptions, endpoints, models,
};
pub use elodan_infrastructure::{FileTokenStore, ReqwestTransport};
