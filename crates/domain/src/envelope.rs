//! API response envelope
//!
//! Most endpoints wrap their payload as `{ success, message?, data }`, but
//! some return the payload bare. [`unwrap_data`] implements the fallback
//! convention callers rely on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard success envelope returned by most endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: Option<bool>,
    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Consumes the envelope and returns the payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Unwraps the `data` field of an envelope, falling back to the raw value.
///
/// A present-but-null `data` field is treated as absent.
#[must_use]
pub fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            _ => Value::Object(map),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_unwrap_enveloped_payload() {
        let value = json!({"success": true, "data": [1, 2, 3]});
        assert_eq!(unwrap_data(value), json!([1, 2, 3]));
    }

    #[test]
    fn test_unwrap_bare_payload() {
        let value = json!([{"id": "a"}]);
        assert_eq!(unwrap_data(value.clone()), value);
    }

    #[test]
    fn test_null_data_falls_back_to_object() {
        let value = json!({"success": true, "data": null});
        assert_eq!(unwrap_data(value), json!({"success": true}));
    }

    #[test]
    fn test_envelope_deserializes_with_missing_fields() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_value(json!({"data": [1]})).unwrap_or(ApiEnvelope {
                success: None,
                message: None,
                data: None,
            });
        assert_eq!(envelope.into_data(), Some(vec![1]));
    }
}
