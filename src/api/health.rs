//! Service status handlers

use crate::catalog::MODELS;
use crate::state::SharedState;
use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Hello response
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Greeting text
    pub message: String,
    /// Status indicator
    pub status: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the server answers
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Time the check was answered
    pub timestamp: DateTime<Utc>,
    /// Users with a session
    pub active_users: usize,
    /// Models in the catalog
    pub models_loaded: usize,
}

/// GET / - Hello world
pub async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from Brad AI Chat API!".to_string(),
        status: "ok".to_string(),
    })
}

/// GET /api/health - Health check
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Brad AI Chat API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        active_users: state.chat.sessions().user_count().await,
        models_loaded: MODELS.len(),
    })
}
