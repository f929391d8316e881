//! Video generation operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::{GenerationModel, VideoGeneration};
use elodan_domain::{QueryParams, endpoints};
use serde::Serialize;
use serde_json::{Value, json};

use super::image::ImprovedPrompt;

/// Video generation request.
///
/// Wire names follow the backend exactly: `modelId` is camelCase while
/// `aspect_ratio`, `camera_fixed` and `resolution` stay snake_case.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateVideoRequest {
    /// Model to use.
    #[serde(rename = "modelId")]
    pub model_id: String,
    /// Prompt text.
    pub prompt: String,
    /// Source image (URL or base64) for image-to-video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Clip duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Output aspect ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Lock the camera in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_fixed: Option<bool>,
    /// Output resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl GenerateVideoRequest {
    /// Creates a request with just a model and prompt.
    #[must_use]
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            prompt: prompt.into(),
            image: None,
            duration: None,
            aspect_ratio: None,
            camera_fixed: None,
            resolution: None,
        }
    }
}

/// Video API wrapper.
pub struct VideoService {
    gateway: Arc<ApiGateway>,
}

#[allow(clippy::missing_errors_doc)]
impl VideoService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Lists the video models, optionally filtered by type.
    pub async fn models(&self, model_type: Option<&str>) -> ApiResult<Vec<GenerationModel>> {
        let value: Value = self
            .gateway
            .get_with(
                endpoints::video::MODELS,
                QueryParams::new().with_opt("type", model_type),
            )
            .await?;
        super::decode_list(value)
    }

    /// Generates a video from a text prompt.
    pub async fn text_to_video(&self, request: &GenerateVideoRequest) -> ApiResult<VideoGeneration> {
        let value: Value = self
            .gateway
            .post(
                endpoints::video::TEXT_TO_VIDEO,
                serde_json::to_value(request).unwrap_or_default(),
            )
            .await?;
        super::decode(value)
    }

    /// Generates a video from a source image.
    pub async fn image_to_video(
        &self,
        request: &GenerateVideoRequest,
    ) -> ApiResult<VideoGeneration> {
        let value: Value = self
            .gateway
            .post(
                endpoints::video::IMAGE_TO_VIDEO,
                serde_json::to_value(request).unwrap_or_default(),
            )
            .await?;
        super::decode(value)
    }

    /// Lets the server pick the prompt.
    pub async fn surprise_me(&self) -> ApiResult<VideoGeneration> {
        let value: Value = self.gateway.post_empty(endpoints::video::SURPRISE_ME).await?;
        super::decode(value)
    }

    /// Asks the server to rewrite a prompt for a model.
    pub async fn improve_prompt(&self, prompt: &str, model_id: &str) -> ApiResult<ImprovedPrompt> {
        let value: Value = self
            .gateway
            .post(
                endpoints::video::IMPROVE_PROMPT,
                json!({"prompt": prompt, "modelId": model_id}),
            )
            .await?;
        super::decode(value)
    }

    /// Returns the generation history page `skip..skip+limit`.
    pub async fn history(&self, limit: u32, skip: u32) -> ApiResult<Vec<VideoGeneration>> {
        let value: Value = self
            .gateway
            .get_with(
                endpoints::video::HISTORY,
                QueryParams::new().with("limit", limit).with("skip", skip),
            )
            .await?;
        super::decode_list(value)
    }

    /// Saves a generation to the permanent gallery.
    pub async fn save_to_gallery(&self, generation_id: &str) -> ApiResult<Value> {
        self.gateway
            .post_empty(&endpoints::video::save(generation_id))
            .await
    }

    /// Deletes a generation from the media library.
    pub async fn delete(&self, media_id: &str) -> ApiResult<()> {
        self.gateway
            .delete::<Value>(&endpoints::media::delete(media_id))
            .await?;
        Ok(())
    }
}
