//! Per-user API handlers
//!
//! Read-only views of a user's profile and conversation history.

use crate::state::{MessageRecord, SharedState, UserProfile};
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;

/// Profile response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Requested user id
    pub user_id: String,
    /// Profile, or null for a user who has not chatted yet
    pub profile: Option<UserProfile>,
    /// Status indicator
    pub status: &'static str,
}

/// History response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Requested user id
    pub user_id: String,
    /// Most recent records, oldest first
    pub history: Vec<MessageRecord>,
    /// Number of records currently kept for the user
    pub total_messages: usize,
    /// Status indicator
    pub status: &'static str,
}

/// GET /api/profile/:user_id - Get a user's profile
pub async fn get_profile(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Json<ProfileResponse> {
    let profile = match state.chat.sessions().get(&user_id).await {
        Some(session) => Some(session.lock().await.profile.clone()),
        None => None,
    };

    Json(ProfileResponse {
        user_id,
        profile,
        status: "success",
    })
}

/// GET /api/history/:user_id - Get a user's recent messages
pub async fn get_history(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Json<HistoryResponse> {
    let (history, total_messages) = match state.chat.sessions().get(&user_id).await {
        Some(session) => {
            let session = session.lock().await;
            (
                session.history.recent(state.history_page_size),
                session.history.len(),
            )
        }
        None => (Vec::new(), 0),
    };

    Json(HistoryResponse {
        user_id,
        history,
        total_messages,
        status: "success",
    })
}
