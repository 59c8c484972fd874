//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::catalog::{self, DEFAULT_MODEL_ID};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Chat configuration
    pub chat: ChatConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

/// Chat configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Model used when a chat request names none
    pub default_model: String,
    /// Number of records returned by the history endpoint
    pub history_page_size: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL_ID.to_string(),
            history_page_size: 20,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: env::var("HOST").unwrap_or(defaults.server.host),
            },
            chat: ChatConfig {
                default_model: env::var("DEFAULT_MODEL").unwrap_or(defaults.chat.default_model),
                history_page_size: env::var("HISTORY_PAGE_SIZE")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.chat.history_page_size),
            },
        }
    }

    /// Check values that cannot be caught while parsing
    pub fn validate(&self) -> Result<(), String> {
        if catalog::find(&self.chat.default_model).is_none() {
            return Err(format!(
                "Default model '{}' is not in the catalog",
                self.chat.default_model
            ));
        }
        if self.chat.history_page_size == 0 {
            return Err("History page size must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
