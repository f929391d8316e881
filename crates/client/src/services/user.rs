//! Profile operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::User;
use elodan_domain::{FormData, endpoints, unwrap_data};
use serde_json::Value;

use super::field_or_self;

/// User profile API wrapper.
pub struct UserService {
    gateway: Arc<ApiGateway>,
}

impl UserService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Updates the profile with a multipart form (text fields plus an
    /// optional avatar part).
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn update_profile(&self, form: FormData) -> ApiResult<User> {
        let value: Value = self
            .gateway
            .patch_form(endpoints::users::PROFILE, form)
            .await?;
        super::decode_raw(field_or_self(unwrap_data(value), "user"))
    }

    /// Deletes the account.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn delete_account(&self) -> ApiResult<Value> {
        self.gateway.delete(endpoints::users::PROFILE).await
    }
}
