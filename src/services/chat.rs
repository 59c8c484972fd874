//! Chat service
//!
//! Runs a single exchange: records the user message, extracts features,
//! generates the reply and updates the profile. The whole exchange happens
//! under the user's session lock.

use crate::analysis::{self, FeatureSet};
use crate::catalog;
use crate::responder;
use crate::state::{MessageRecord, MessageRole, SessionStore};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use tracing::info;

/// Number of recent records handed to the responder as context
pub const CONTEXT_WINDOW: usize = 10;

/// Result of one exchange
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// Generated reply text
    pub response: String,
    /// Features extracted from the user message
    pub features: FeatureSet,
    /// When the reply was recorded
    pub timestamp: DateTime<Utc>,
}

/// Owns the session store and the random source for template selection
#[derive(Debug)]
pub struct ChatService {
    sessions: SessionStore,
    rng: Mutex<StdRng>,
}

impl ChatService {
    /// Create a service seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a service with a fixed seed, for reproducible replies
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            sessions: SessionStore::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Session store backing this service
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Answer `message` from `user_id` with the given model
    ///
    /// Model ids outside the catalog are answered with the standard strategy;
    /// rejecting them is up to the caller.
    pub async fn exchange(&self, user_id: &str, model_id: &str, message: &str) -> ChatOutcome {
        let session = self.sessions.get_or_create(user_id).await;
        let mut session = session.lock().await;

        session
            .history
            .push(MessageRecord::new(MessageRole::User, message, model_id));

        let features = analysis::extract(message);
        let context = session.history.recent(CONTEXT_WINDOW);
        let strategy = catalog::strategy_for(model_id);

        let response = {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            responder::respond(message, strategy, &context, &features, &mut *rng)
        };

        let reply = MessageRecord::new(MessageRole::Assistant, response.clone(), model_id);
        let timestamp = reply.timestamp;
        session.history.push(reply);
        session.profile.record_interaction(&features, model_id);

        info!(
            user_id = %user_id,
            model = %model_id,
            strategy = ?strategy,
            sentiment = %features.sentiment_label,
            topics = features.topics.len(),
            interactions = session.profile.interaction_count,
            "Chat exchange completed"
        );

        ChatOutcome {
            response,
            features,
            timestamp,
        }
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}
