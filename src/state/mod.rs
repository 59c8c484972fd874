//! State management module
//!
//! Handles per-user conversation history and profiles.

pub mod app_state;
pub mod history;
pub mod profile;
pub mod store;

pub use app_state::{AppState, SharedState};
pub use history::{ConversationHistory, MessageRecord, MessageRole, MAX_HISTORY};
pub use profile::{UserProfile, MAX_PROFILE_TOPICS};
pub use store::{SessionHandle, SessionStore, UserSession};
