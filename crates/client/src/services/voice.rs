//! Voice generation operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::{GenerationModel, VoiceGeneration, VoiceOption};
use elodan_domain::{QueryParams, endpoints};
use serde::Serialize;
use serde_json::Value;

/// Voice generation request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVoiceRequest {
    /// Model to use.
    pub model_id: String,
    /// Text to speak.
    pub text: String,
    /// Language code.
    pub language: String,
    /// Specific voice to use; the model default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}

/// Voice API wrapper.
pub struct VoiceService {
    gateway: Arc<ApiGateway>,
}

#[allow(clippy::missing_errors_doc)]
impl VoiceService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Lists the text-to-speech models.
    pub async fn models(&self) -> ApiResult<Vec<GenerationModel>> {
        let value: Value = self.gateway.get(endpoints::voice::MODELS).await?;
        super::decode_list(value)
    }

    /// Lists the voices available for a model.
    pub async fn voices(&self, model_id: &str) -> ApiResult<Vec<VoiceOption>> {
        let value: Value = self
            .gateway
            .get_with(
                endpoints::voice::VOICES,
                QueryParams::new().with("modelId", model_id),
            )
            .await?;
        super::decode_list(value)
    }

    /// Generates a voice clip from text.
    pub async fn generate(&self, request: &GenerateVoiceRequest) -> ApiResult<VoiceGeneration> {
        let value: Value = self
            .gateway
            .post(
                endpoints::voice::GENERATE,
                serde_json::to_value(request).unwrap_or_default(),
            )
            .await?;
        super::decode(value)
    }

    /// Returns the generation history, paginated 1-based.
    pub async fn history(&self, page: u32, limit: u32) -> ApiResult<Vec<VoiceGeneration>> {
        let value: Value = self
            .gateway
            .get_with(
                endpoints::voice::HISTORY,
                QueryParams::new().with("page", page).with("limit", limit),
            )
            .await?;
        super::decode_list(value)
    }

    /// Saves a clip to the permanent gallery.
    pub async fn save_to_gallery(&self, generation_id: &str) -> ApiResult<Value> {
        self.gateway
            .post_empty(&endpoints::voice::save(generation_id))
            .await
    }

    /// Deletes a clip from the history.
    pub async fn delete(&self, generation_id: &str) -> ApiResult<()> {
        self.gateway
            .delete::<Value>(&endpoints::voice::delete(generation_id))
            .await?;
        Ok(())
    }
}
