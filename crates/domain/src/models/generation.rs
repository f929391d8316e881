//! Generation model and history record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generation model offered by the platform (chat, image, video, voice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationModel {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Model category (e.g. "image", "video").
    #[serde(default)]
    pub category: Option<String>,
    /// Short description shown in pickers.
    #[serde(default)]
    pub description: Option<String>,
    /// Upstream provider name.
    #[serde(default)]
    pub provider: Option<String>,
    /// Whether the model requires a face in the input image.
    #[serde(default)]
    pub requires_face: Option<bool>,
}

/// A generated image record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGeneration {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Prompt used for the generation.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Model that produced the image.
    #[serde(default)]
    pub model_id: Option<String>,
    /// URL of the produced image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Output resolution (e.g. "1024x1024").
    #[serde(default)]
    pub resolution: Option<String>,
    /// Output aspect ratio (e.g. "1:1").
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the record was saved to the gallery.
    #[serde(default)]
    pub saved: Option<bool>,
}

/// A generated video record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGeneration {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Prompt used for the generation.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Model that produced the video.
    #[serde(default)]
    pub model_id: Option<String>,
    /// URL of the produced video.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Clip duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    /// Output resolution.
    #[serde(default)]
    pub resolution: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A generated voice clip record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceGeneration {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Text that was spoken.
    #[serde(default)]
    pub text: Option<String>,
    /// URL of the produced audio.
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Language code of the clip.
    #[serde(default)]
    pub language: Option<String>,
    /// Voice used for the clip.
    #[serde(default)]
    pub voice_id: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A voice available for a text-to-speech model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceOption {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Language code the voice speaks.
    #[serde(default)]
    pub language: Option<String>,
}

/// A generated video-effect record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEffectGeneration {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Effect scene that was applied.
    #[serde(default)]
    pub effect_scene: Option<String>,
    /// URL of the produced video.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A video-effect category with its scene count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectCategory {
    /// Category name.
    pub name: String,
    /// Number of scenes in the category.
    #[serde(default)]
    pub count: Option<u32>,
}

/// Pagination metadata attached to history listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 1-based.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total record count.
    #[serde(default)]
    pub total: Option<u64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_model_with_unknown_fields() {
        let model: GenerationModel = serde_json::from_value(json!({
            "_id": "m1",
            "name": "Photon",
            "category": "image",
            "pricePerCall": 0.01
        }))
        .unwrap();
        assert_eq!(model.id, "m1");
        assert_eq!(model.category.as_deref(), Some("image"));
    }

    #[test]
    fn test_video_generation_minimal() {
        let record: VideoGeneration = serde_json::from_value(json!({"id": "v1"})).unwrap();
        assert_eq!(record.video_url, None);
        assert_eq!(record.duration, None);
    }
}
