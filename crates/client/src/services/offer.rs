//! Promotional offer operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::{Offer, OfferTarget, OfferValidation};
use elodan_domain::{endpoints, unwrap_data};
use serde_json::{Value, json};

/// Offer API wrapper.
pub struct OfferService {
    gateway: Arc<ApiGateway>,
}

#[allow(clippy::missing_errors_doc)]
impl OfferService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Lists the active offers.
    pub async fn offers(&self) -> ApiResult<Vec<Offer>> {
        let value: Value = self.gateway.get(endpoints::offers::ALL).await?;
        super::decode_list(value)
    }

    /// Returns the most recent offer, if there is one.
    pub async fn latest(&self) -> ApiResult<Option<Offer>> {
        let value: Value = self.gateway.get(endpoints::offers::LATEST).await?;
        let data = unwrap_data(value);
        if data.is_null() || data.as_object().is_some_and(serde_json::Map::is_empty) {
            return Ok(None);
        }
        super::decode_raw(data).map(Some)
    }

    /// Validates an offer against a plan or bundle.
    pub async fn validate(
        &self,
        offer_id: &str,
        target: OfferTarget,
        target_id: &str,
    ) -> ApiResult<OfferValidation> {
        let value: Value = self
            .gateway
            .post(
                endpoints::offers::VALIDATE,
                json!({
                    "offerId": offer_id,
                    "targetType": target.as_str(),
                    "targetId": target_id,
                }),
            )
            .await?;
        super::decode(value)
    }
}
