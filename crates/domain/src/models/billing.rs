//! Plan, subscription, bundle and offer models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Plan name.
    #[serde(default)]
    pub name: Option<String>,
    /// Marketing description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price per billing interval.
    #[serde(default)]
    pub price: Option<f64>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Billing interval (e.g. "month", "year").
    #[serde(default)]
    pub interval: Option<String>,
    /// Credits granted per interval.
    #[serde(default)]
    pub credits: Option<u64>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
}

/// The account's active subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Subscription status (e.g. "active", "canceled").
    #[serde(default)]
    pub status: Option<String>,
    /// The subscribed plan, when the server expands it.
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Plan id, when the server returns the reference only.
    #[serde(default)]
    pub plan_id: Option<String>,
    /// End of the current billing period.
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
}

/// A one-off credit bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Bundle name.
    #[serde(default)]
    pub name: Option<String>,
    /// Price of the bundle.
    #[serde(default)]
    pub price: Option<f64>,
    /// Credits granted by the bundle.
    #[serde(default)]
    pub credits: Option<u64>,
}

/// A promotional offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Offer title.
    #[serde(default)]
    pub title: Option<String>,
    /// Discount percentage applied by the offer.
    #[serde(default)]
    pub discount_percent: Option<f64>,
    /// Redemption code, when the offer requires one.
    #[serde(default)]
    pub code: Option<String>,
    /// Expiry timestamp.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// What an offer is being validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferTarget {
    /// A subscription plan.
    Plan,
    /// A credit bundle.
    Bundle,
}

impl OfferTarget {
    /// Returns the wire name of the target type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Bundle => "bundle",
        }
    }
}

/// Result of validating an offer against a plan or bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferValidation {
    /// Whether the offer applies.
    #[serde(default)]
    pub valid: bool,
    /// Discounted price, when the server computes one.
    #[serde(default)]
    pub discounted_price: Option<f64>,
    /// Explanation when the offer does not apply.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_plan_defaults() {
        let plan: Plan = serde_json::from_value(json!({"_id": "p1", "name": "Pro"})).unwrap();
        assert_eq!(plan.id, "p1");
        assert!(plan.features.is_empty());
    }

    #[test]
    fn test_subscription_with_expanded_plan() {
        let sub: Subscription = serde_json::from_value(json!({
            "id": "sub1",
            "status": "active",
            "plan": {"id": "p1", "name": "Pro"}
        }))
        .unwrap();
        assert_eq!(sub.plan.unwrap().id, "p1");
        assert_eq!(sub.plan_id, None);
    }

    #[test]
    fn test_offer_target_wire_names() {
        assert_eq!(OfferTarget::Plan.as_str(), "plan");
        assert_eq!(OfferTarget::Bundle.as_str(), "bundle");
    }
}
