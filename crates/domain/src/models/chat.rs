//! Chat session and message models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The human participant.
    User,
    /// The model.
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Author role.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
    /// Creation timestamp.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Session title.
    #[serde(default)]
    pub title: Option<String>,
    /// Model used for the session.
    #[serde(default)]
    pub model_id: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Preview of the most recent message.
    #[serde(default)]
    pub last_message: Option<String>,
    /// Whether the session is pinned in the sidebar.
    #[serde(default)]
    pub is_pinned: Option<bool>,
    /// Accent color assigned to the session.
    #[serde(default)]
    pub color: Option<String>,
}

/// The message pair produced by sending one user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    /// The echoed user message.
    pub user_message: ChatMessage,
    /// The model's reply.
    pub ai_message: ChatMessage,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_session_from_mongo_payload() {
        let session: ChatSession = serde_json::from_value(json!({
            "_id": "s1",
            "title": "Trip planning",
            "modelId": "m1",
            "createdAt": "2026-07-01T10:00:00Z",
            "isPinned": true
        }))
        .unwrap();
        assert_eq!(session.id, "s1");
        assert_eq!(session.is_pinned, Some(true));
        assert_eq!(session.color, None);
    }

    #[test]
    fn test_turn_payload() {
        let turn: ChatTurn = serde_json::from_value(json!({
            "userMessage": {"_id": "m1", "role": "user", "content": "hi"},
            "aiMessage": {"_id": "m2", "role": "assistant", "content": "hello"}
        }))
        .unwrap();
        assert_eq!(turn.user_message.role, ChatRole::User);
        assert_eq!(turn.ai_message.role, ChatRole::Assistant);
    }
}
