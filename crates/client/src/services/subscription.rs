//! Plan, subscription and bundle operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::{Bundle, Plan, Subscription};
use elodan_domain::endpoints;
use serde_json::{Value, json};

/// Subscription API wrapper.
pub struct SubscriptionService {
    gateway: Arc<ApiGateway>,
}

#[allow(clippy::missing_errors_doc)]
impl SubscriptionService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Lists the available plans.
    pub async fn plans(&self) -> ApiResult<Vec<Plan>> {
        let value: Value = self.gateway.get(endpoints::plans::ALL).await?;
        super::decode_list(value)
    }

    /// Fetches a single plan.
    pub async fn plan(&self, plan_id: &str) -> ApiResult<Plan> {
        let value: Value = self.gateway.get(&endpoints::plans::one(plan_id)).await?;
        super::decode(value)
    }

    /// Returns the account's current subscription.
    pub async fn current(&self) -> ApiResult<Subscription> {
        let value: Value = self.gateway.get(endpoints::subscriptions::CURRENT).await?;
        super::decode(value)
    }

    /// Subscribes the account to a plan.
    pub async fn subscribe(&self, plan_id: &str) -> ApiResult<Subscription> {
        let value: Value = self
            .gateway
            .post(endpoints::subscriptions::SUBSCRIBE, json!({"planId": plan_id}))
            .await?;
        super::decode(value)
    }

    /// Moves the subscription to a different plan.
    pub async fn change_plan(&self, new_plan_id: &str) -> ApiResult<Subscription> {
        let value: Value = self
            .gateway
            .post(
                endpoints::subscriptions::CHANGE_PLAN,
                json!({"newPlanId": new_plan_id}),
            )
            .await?;
        super::decode(value)
    }

    /// Lists the one-off credit bundles.
    pub async fn bundles(&self) -> ApiResult<Vec<Bundle>> {
        let value: Value = self.gateway.get(endpoints::bundles::ALL).await?;
        super::decode_list(value)
    }

    /// Purchases a credit bundle.
    pub async fn purchase_bundle(&self, bundle_id: &str) -> ApiResult<Value> {
        self.gateway
            .post(endpoints::bundles::PURCHASE, json!({"bundleId": bundle_id}))
            .await
    }
}
