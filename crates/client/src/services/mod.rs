//! Per-resource service wrappers.
//!
//! Each service is a thin, typed mapping from methods to endpoints; all
//! transport, auth and retry behavior lives in the gateway. Services
//! unwrap the standard `{ success, data }` envelope and fall back to the
//! raw payload when an endpoint returns it bare.

mod auth;
mod chat;
mod image;
mod offer;
mod subscription;
mod user;
mod video;
mod video_effect;
mod voice;

pub use auth::{AuthResponse, AuthService, RegisterRequest};
pub use chat::{ChatService, SessionUpdate};
pub use image::{
    GenerateImageRequest, ImageGenerationType, ImageService, ImageUpload, ImprovedPrompt,
};
pub use offer::OfferService;
pub use subscription::SubscriptionService;
pub use user::UserService;
pub use video::{GenerateVideoRequest, VideoService};
pub use video_effect::{EffectFilters, GenerateEffectRequest, VideoEffectService};
pub use voice::{GenerateVoiceRequest, VoiceService};

use elodan_application::{ApiError, ApiResult};
use elodan_domain::unwrap_data;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes an envelope-or-bare payload into the target type.
fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    decode_raw(unwrap_data(value))
}

/// Decodes an already-unwrapped payload into the target type.
fn decode_raw<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decodes a listing payload; a null payload becomes an empty list.
fn decode_list<T: DeserializeOwned>(value: Value) -> ApiResult<Vec<T>> {
    let data = unwrap_data(value);
    if data.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Narrows a payload to one of its fields when present, mirroring the
/// `data.user || data` convention of the backend.
fn field_or_self(value: Value, key: &str) -> Value {
    match value {
        Value::Object(ref map) if map.contains_key(key) => map
            .get(key)
            .cloned()
            .unwrap_or(Value::Null),
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_unwraps_envelope() {
        let value = json!({"success": true, "data": {"id": "1", "email": "a@b.c"}});
        let user: elodan_domain::models::User = decode(value).unwrap();
        assert_eq!(user.id, "1");
    }

    #[test]
    fn test_decode_list_null_is_empty() {
        let list: Vec<elodan_domain::models::Plan> = decode_list(json!(null)).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_decode_list_bare_array() {
        let list: Vec<elodan_domain::models::Plan> =
            decode_list(json!([{"id": "p1"}])).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_field_or_self() {
        assert_eq!(
            field_or_self(json!({"user": {"id": "u1"}}), "user"),
            json!({"id": "u1"})
        );
        assert_eq!(
            field_or_self(json!({"id": "u1"}), "user"),
            json!({"id": "u1"})
        );
    }
}
