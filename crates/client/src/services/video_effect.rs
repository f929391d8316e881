//! Video effect template operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::{EffectCategory, GenerationModel, VideoEffectGeneration};
use elodan_domain::{FormData, QueryParams, endpoints, unwrap_data};
use serde_json::Value;

use super::image::ImageUpload;

/// Filters for the effect model listing.
#[derive(Debug, Clone, Default)]
pub struct EffectFilters {
    /// Only effects that do (or do not) require a face in the photo.
    pub requires_face: Option<bool>,
    /// Only effects in this category.
    pub category: Option<String>,
}

/// Video effect generation request.
#[derive(Debug, Clone)]
pub struct GenerateEffectRequest {
    /// Photo the effect is applied to.
    pub image: ImageUpload,
    /// Effect scene identifier.
    pub effect_scene: String,
    /// Optional extra prompt.
    pub prompt: Option<String>,
}

/// Video effect API wrapper.
pub struct VideoEffectService {
    gateway: Arc<ApiGateway>,
}

#[allow(clippy::missing_errors_doc)]
impl VideoEffectService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Lists effect models, filtered by face requirement or category.
    pub async fn models(&self, filters: EffectFilters) -> ApiResult<Vec<GenerationModel>> {
        let query = QueryParams::new()
            .with_opt("requiresFace", filters.requires_face)
            .with_opt("category", filters.category);
        let value: Value = self
            .gateway
            .get_with(endpoints::video_effects::MODELS, query)
            .await?;
        super::decode_list(value)
    }

    /// Returns the effect categories with their scene counts.
    pub async fn categories(&self) -> ApiResult<Vec<EffectCategory>> {
        let value: Value = self.gateway.get(endpoints::video_effects::CATEGORIES).await?;
        let data = unwrap_data(value);
        // The endpoint wraps the list one level deeper: { categories: [...] }.
        let categories = super::field_or_self(data, "categories");
        if categories.is_null() {
            return Ok(Vec::new());
        }
        super::decode_raw(categories)
    }

    /// Applies an effect scene to a photo; always multipart.
    pub async fn generate(
        &self,
        request: GenerateEffectRequest,
    ) -> ApiResult<VideoEffectGeneration> {
        let mut form = FormData::new()
            .bytes(
                "image",
                request.image.filename,
                request.image.content,
                request.image.mime,
            )
            .text("effectScene", request.effect_scene);
        if let Some(prompt) = request.prompt {
            form = form.text("prompt", prompt);
        }

        let value: Value = self
            .gateway
            .post_form(endpoints::video_effects::GENERATE, form)
            .await?;
        super::decode(value)
    }

    /// Returns the generation history page `skip..skip+limit`.
    pub async fn history(&self, limit: u32, skip: u32) -> ApiResult<Vec<VideoEffectGeneration>> {
        let value: Value = self
            .gateway
            .get_with(
                endpoints::video_effects::HISTORY,
                QueryParams::new().with("limit", limit).with("skip", skip),
            )
            .await?;
        super::decode_list(value)
    }

    /// Saves a temporary generation to the permanent gallery.
    pub async fn save_to_gallery(&self, effect_id: &str) -> ApiResult<Value> {
        self.gateway
            .post_empty(&endpoints::video_effects::save(effect_id))
            .await
    }

    /// Deletes a generation.
    pub async fn delete(&self, effect_id: &str) -> ApiResult<()> {
        self.gateway
            .delete::<Value>(&endpoints::video_effects::delete(effect_id))
            .await?;
        Ok(())
    }
}
