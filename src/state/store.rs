//! Per-user session store
//!
//! Maps user ids to their history and profile. The outer map lock is only
//! held to find or insert an entry; every read or update of one user's data
//! goes through that user's own mutex, so exchanges for the same user are
//! serialized while different users proceed independently.

use super::history::ConversationHistory;
use super::profile::UserProfile;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Everything kept for one user
#[derive(Debug, Default)]
pub struct UserSession {
    /// Exchanged messages, newest last
    pub history: ConversationHistory,
    /// Aggregate profile
    pub profile: UserProfile,
}

/// Shared handle to one user's session
pub type SessionHandle = Arc<Mutex<UserSession>>;

/// Process-wide map from user id to session
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for `user_id`, creating it on first use
    pub async fn get_or_create(&self, user_id: &str) -> SessionHandle {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(user_id) {
                return session.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id.to_string())
            .or_insert_with(|| {
                debug!(user_id = %user_id, "Creating new user session");
                Arc::new(Mutex::new(UserSession::default()))
            })
            .clone()
    }

    /// Get the session for `user_id` if the user has chatted before
    pub async fn get(&self, user_id: &str) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(user_id).cloned()
    }

    /// Number of users with a session
    pub async fn user_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}
