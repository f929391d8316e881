//! Image generation operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::{GenerationModel, ImageGeneration};
use elodan_domain::{FormData, endpoints};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Kind of image generation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageGenerationType {
    /// Prompt only.
    TextToImage,
    /// Prompt plus an input image.
    ImageToImage,
    /// Server picks the prompt.
    SurpriseMe,
}

impl ImageGenerationType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::TextToImage => "text-to-image",
            Self::ImageToImage => "image-to-image",
            Self::SurpriseMe => "surprise-me",
        }
    }
}

/// An input image uploaded with an image-to-image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Filename reported to the server.
    pub filename: String,
    /// Raw image bytes.
    pub content: Vec<u8>,
    /// MIME type; guessed from the filename when absent.
    pub mime: Option<String>,
}

/// Response of the improve-prompt endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovedPrompt {
    /// The rewritten prompt.
    pub improved_prompt: String,
}

/// Image generation request.
///
/// Defaults applied on send: resolution "1024x1024", aspect ratio "1:1"
/// for uploads.
#[derive(Debug, Clone, Default)]
pub struct GenerateImageRequest {
    /// Prompt text.
    pub prompt: Option<String>,
    /// Model to use.
    pub model_id: Option<String>,
    /// Output resolution.
    pub resolution: Option<String>,
    /// Output quality hint.
    pub quality: Option<String>,
    /// Output aspect ratio.
    pub aspect_ratio: Option<String>,
    /// Input image for image-to-image generation.
    pub input_image: Option<ImageUpload>,
}

const DEFAULT_RESOLUTION: &str = "1024x1024";

/// Image API wrapper.
pub struct ImageService {
    gateway: Arc<ApiGateway>,
}

#[allow(clippy::missing_errors_doc)]
impl ImageService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Lists the image models available to the account.
    pub async fn models(&self) -> ApiResult<Vec<GenerationModel>> {
        let value: Value = self.gateway.get(endpoints::image::MODELS).await?;
        super::decode_list(value)
    }

    /// Runs an image generation.
    ///
    /// Surprise-me requests send only the resolution; requests carrying
    /// an input image go out as multipart form data; everything else is
    /// plain JSON.
    pub async fn generate(
        &self,
        kind: ImageGenerationType,
        request: GenerateImageRequest,
    ) -> ApiResult<ImageGeneration> {
        let resolution = request
            .resolution
            .clone()
            .unwrap_or_else(|| DEFAULT_RESOLUTION.to_string());

        if kind == ImageGenerationType::SurpriseMe {
            let value: Value = self
                .gateway
                .post(
                    endpoints::image::GENERATE,
                    json!({
                        "generationType": kind.as_str(),
                        "resolution": resolution,
                    }),
                )
                .await?;
            return super::decode(value);
        }

        if let Some(image) = request.input_image {
            let form = FormData::new()
                .text("prompt", request.prompt.unwrap_or_default())
                .text("modelId", request.model_id.unwrap_or_default())
                .text("resolution", resolution)
                .text(
                    "aspectRatio",
                    request.aspect_ratio.unwrap_or_else(|| "1:1".to_string()),
                )
                .text("generationType", kind.as_str())
                .bytes("inputImage", image.filename, image.content, image.mime);
            let value: Value = self.gateway.post_form(endpoints::image::GENERATE, form).await?;
            return super::decode(value);
        }

        let mut body = Map::new();
        if let Some(prompt) = request.prompt {
            body.insert("prompt".to_string(), Value::String(prompt));
        }
        if let Some(model_id) = request.model_id {
            body.insert("modelId".to_string(), Value::String(model_id));
        }
        if let Some(quality) = request.quality {
            body.insert("quality".to_string(), Value::String(quality));
        }
        if let Some(aspect_ratio) = request.aspect_ratio {
            body.insert("aspectRatio".to_string(), Value::String(aspect_ratio));
        }
        body.insert("resolution".to_string(), Value::String(resolution));
        body.insert(
            "generationType".to_string(),
            Value::String(kind.as_str().to_string()),
        );

        let value: Value = self
            .gateway
            .post(endpoints::image::GENERATE, Value::Object(body))
            .await?;
        super::decode(value)
    }

    /// Asks the server to rewrite a prompt for a model.
    pub async fn improve_prompt(&self, prompt: &str, model_id: &str) -> ApiResult<ImprovedPrompt> {
        let value: Value = self
            .gateway
            .post(
                endpoints::image::IMPROVE_PROMPT,
                json!({"prompt": prompt, "modelId": model_id}),
            )
            .await?;
        super::decode(value)
    }

    /// Returns the account's image generation history.
    pub async fn history(&self) -> ApiResult<Vec<ImageGeneration>> {
        let value: Value = self.gateway.get(endpoints::image::HISTORY).await?;
        super::decode_list(value)
    }

    /// Saves a generation to the permanent gallery.
    pub async fn save_to_gallery(&self, generation_id: &str) -> ApiResult<Value> {
        self.gateway
            .post_empty(&endpoints::image::save(generation_id))
            .await
    }

    /// Deletes a generation.
    pub async fn delete(&self, generation_id: &str) -> ApiResult<()> {
        self.gateway
            .delete::<Value>(&endpoints::image::delete(generation_id))
            .await?;
        Ok(())
    }
}
