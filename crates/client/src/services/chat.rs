//! Chat session and message operations.

use std::sync::Arc;

use elodan_application::{ApiGateway, ApiResult};
use elodan_domain::models::{ChatMessage, ChatSession, ChatTurn, GenerationModel};
use elodan_domain::{HttpMethod, RequestOptions, endpoints};
use serde::Serialize;
use serde_json::{Value, json};

/// Fields of a chat session that can be updated in place.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New accent color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Pin or unpin the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
}

/// Chat API wrapper.
pub struct ChatService {
    gateway: Arc<ApiGateway>,
}

#[allow(clippy::missing_errors_doc)]
impl ChatService {
    pub(crate) const fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Lists the chat models available to the account.
    pub async fn models(&self) -> ApiResult<Vec<GenerationModel>> {
        let value: Value = self.gateway.get(endpoints::chat::MODELS).await?;
        super::decode_list(value)
    }

    /// Creates a chat session, optionally pinned to a model.
    pub async fn create_session(&self, model_id: Option<&str>) -> ApiResult<ChatSession> {
        let value: Value = self
            .gateway
            .post(endpoints::chat::SESSIONS, json!({"modelId": model_id}))
            .await?;
        super::decode(value)
    }

    /// Lists the account's chat sessions.
    pub async fn sessions(&self) -> ApiResult<Vec<ChatSession>> {
        let value: Value = self.gateway.get(endpoints::chat::SESSIONS).await?;
        super::decode_list(value)
    }

    /// Deletes a session.
    pub async fn delete_session(&self, session_id: &str) -> ApiResult<()> {
        self.gateway
            .delete::<Value>(&endpoints::chat::session(session_id))
            .await?;
        Ok(())
    }

    /// Updates a session's title, color, or pinned state.
    pub async fn update_session(
        &self,
        session_id: &str,
        update: &SessionUpdate,
    ) -> ApiResult<ChatSession> {
        let value: Value = self
            .gateway
            .request(
                &endpoints::chat::session(session_id),
                RequestOptions::new()
                    .with_method(HttpMethod::Patch)
                    .with_json(serde_json::to_value(update).unwrap_or_default()),
            )
            .await?;
        super::decode(value)
    }

    /// Sends a message and returns the user/assistant message pair.
    pub async fn send_message(&self, session_id: &str, message: &str) -> ApiResult<ChatTurn> {
        let value: Value = self
            .gateway
            .post(
                &endpoints::chat::messages(session_id),
                json!({"message": message}),
            )
            .await?;
        super::decode(value)
    }

    /// Returns the message history of a session.
    pub async fn history(&self, session_id: &str) -> ApiResult<Vec<ChatMessage>> {
        let value: Value = self
            .gateway
            .get(&endpoints::chat::messages(session_id))
            .await?;
        super::decode_list(value)
    }
}
