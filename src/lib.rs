//! Brad AI Chat Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod analysis;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod responder;
pub mod services;
/// Application state management
///
/// Handles per-user sessions, history and profiles.
pub mod state;
