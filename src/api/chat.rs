//! Chat API endpoint
//!
//! Validates the request, runs one exchange through the chat service and
//! returns the reply with the extracted features.

use crate::analysis::FeatureSet;
use crate::api::extract::AppJson;
use crate::catalog;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User id used when a request does not carry one
pub const DEFAULT_USER_ID: &str = "default";

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Message text (trimmed before use); null is treated as missing
    #[serde(default)]
    pub message: Option<String>,
    /// Catalog id of the model to answer with
    #[serde(default)]
    pub model: Option<String>,
    /// Caller-chosen user identifier
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Generated reply
    pub response: String,
    /// Display name of the model that answered
    pub model: String,
    /// Version label of the model that answered
    pub model_version: String,
    /// When the reply was recorded
    pub timestamp: DateTime<Utc>,
    /// Features extracted from the message
    pub ml_insights: FeatureSet,
}

/// POST /api/chat - Send a message and get a reply
pub async fn chat(
    State(state): State<SharedState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.as_deref().unwrap_or_default().trim();
    if message.is_empty() {
        return Err(AppError::MessageRequired);
    }

    let model_id = request
        .model
        .unwrap_or_else(|| state.default_model.clone());
    let model =
        catalog::find(&model_id).ok_or_else(|| AppError::ModelNotFound(model_id.clone()))?;

    let user_id = request
        .user_id
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    debug!(
        user_id = %user_id,
        model = %model_id,
        message_len = message.len(),
        "Chat request received"
    );

    let outcome = state.chat.exchange(&user_id, model.id, message).await;

    Ok(Json(ChatResponse {
        response: outcome.response,
        model: model.name.to_string(),
        model_version: model.version.to_string(),
        timestamp: outcome.timestamp,
        ml_insights: outcome.features,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Sentiment;
    use crate::config::Config;
    use crate::services::ChatService;
    use crate::state::AppState;

    fn create_test_state() -> SharedState {
        AppState::with_service(&Config::default(), ChatService::with_seed(0)).shared()
    }

    fn request(
        message: &str,
        model: Option<&str>,
        user_id: Option<&str>,
    ) -> AppJson<ChatRequest> {
        AppJson(ChatRequest {
            message: Some(message.to_string()),
            model: model.map(str::to_string),
            user_id: user_id.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_chat_with_defaults() {
        let state = create_test_state();
        let response = chat(State(state.clone()), request("  hello there  ", None, None))
            .await
            .unwrap();

        assert_eq!(response.model, "Brad AI 1.12.2x");
        assert_eq!(response.model_version, "1.12.2x");
        assert_eq!(response.ml_insights.word_count, 2);
        assert!(state.chat.sessions().get(DEFAULT_USER_ID).await.is_some());
    }

    #[tokio::test]
    async fn test_chat_returns_features() {
        let state = create_test_state();
        let response = chat(
            State(state),
            request("I love this course, it's great!", Some("brad-ai-2.0.1a"), Some("u1")),
        )
        .await
        .unwrap();

        assert_eq!(response.ml_insights.sentiment_label, Sentiment::Positive);
        assert!(response.ml_insights.topics.is_empty());
        assert!(response
            .response
            .starts_with("I notice this query has a positive sentiment."));
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let state = create_test_state();
        let result = chat(State(state.clone()), request("   ", None, Some("u2"))).await;
        match result.unwrap_err() {
            AppError::MessageRequired => {}
            other => panic!("Expected MessageRequired error, got: {:?}", other),
        }
        assert_eq!(state.chat.sessions().user_count().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_model_rejected() {
        let state = create_test_state();
        let result = chat(State(state.clone()), request("hi", Some("brad-ai-9"), None)).await;
        match result.unwrap_err() {
            AppError::ModelNotFound(model) => assert_eq!(model, "brad-ai-9"),
            other => panic!("Expected ModelNotFound error, got: {:?}", other),
        }
        assert_eq!(state.chat.sessions().user_count().await, 0);
    }
}
