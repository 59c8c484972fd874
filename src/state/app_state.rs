//! Application state
//!
//! Shared by every request handler.

use crate::config::Config;
use crate::services::ChatService;
use std::sync::Arc;

/// State handed to the router
pub type SharedState = Arc<AppState>;

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Chat exchanges and per-user sessions
    pub chat: ChatService,
    /// Model used when a chat request names none
    pub default_model: String,
    /// Number of records returned by the history endpoint
    pub history_page_size: usize,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_service(config, ChatService::new())
    }

    /// Create application state around an existing chat service
    pub fn with_service(config: &Config, chat: ChatService) -> Self {
        Self {
            chat,
            default_model: config.chat.default_model.clone(),
            history_page_size: config.chat.history_page_size,
        }
    }

    /// Wrap into the shared handle used by the router
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_MODEL_ID;

    #[tokio::test]
    async fn test_app_state_creation() {
        let state = AppState::new(&Config::default());
        assert_eq!(state.default_model, DEFAULT_MODEL_ID);
        assert_eq!(state.history_page_size, 20);
        assert_eq!(state.chat.sessions().user_count().await, 0);
    }
}
