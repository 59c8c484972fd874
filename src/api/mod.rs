//! API module
//!
//! Contains HTTP request handlers and the router that wires them together

pub mod chat;
pub mod extract;
pub mod health;
pub mod models;
pub mod users;

use crate::state::SharedState;
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all API routes
///
/// Middleware layers are added by the caller.
pub fn router(state: SharedState) -> Router {
    Router::new()
        // Health check and hello world
        .route("/", get(health::hello_world))
        .route("/api/health", get(health::health_check))
        // Model catalog
        .route("/api/models", get(models::list_models))
        .route("/api/models/:model_id", get(models::get_model))
        // Chat
        .route("/api/chat", post(chat::chat))
        // Per-user views
        .route("/api/profile/:user_id", get(users::get_profile))
        .route("/api/history/:user_id", get(users::get_history))
        .with_state(state)
}
