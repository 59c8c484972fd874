//! User profiles
//!
//! A rolling aggregate updated once per exchange.

use crate::analysis::{FeatureSet, Topic};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Maximum number of distinct topics remembered per user
pub const MAX_PROFILE_TOPICS: usize = 10;

/// Aggregate record for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    /// Number of completed exchanges
    pub interaction_count: u64,
    /// Distinct topics seen, oldest first
    pub topics: VecDeque<Topic>,
    /// Running mean of message sentiment scores
    pub average_sentiment: f64,
    /// Model used in the most recent exchange
    pub preferred_model: Option<String>,
    /// Time of the most recent exchange
    pub last_interaction: DateTime<Utc>,
}

impl UserProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self {
            interaction_count: 0,
            topics: VecDeque::new(),
            average_sentiment: 0.0,
            preferred_model: None,
            last_interaction: Utc::now(),
        }
    }

    /// Fold one exchange into the profile
    pub fn record_interaction(&mut self, features: &FeatureSet, model_id: &str) {
        self.interaction_count += 1;
        self.last_interaction = Utc::now();
        self.preferred_model = Some(model_id.to_string());

        merge_capped(
            &mut self.topics,
            features.topics.iter().copied(),
            MAX_PROFILE_TOPICS,
        );

        let n = self.interaction_count as f64;
        self.average_sentiment =
            (self.average_sentiment * (n - 1.0) + features.sentiment_score) / n;
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Append unseen items and evict from the front until at most `cap` remain
fn merge_capped<T: PartialEq>(
    list: &mut VecDeque<T>,
    items: impl IntoIterator<Item = T>,
    cap: usize,
) {
    for item in items {
        if !list.contains(&item) {
            list.push_back(item);
        }
    }
    while list.len() > cap {
        list.pop_front();
    }
}
