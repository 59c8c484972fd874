//! Conversation history
//!
//! Defines message records and the capped, append-only list kept per user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of records kept per user
pub const MAX_HISTORY: usize = 50;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user
    User,
    /// Message from the assistant
    Assistant,
}

impl MessageRole {
    /// Convert the role to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single exchanged message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Who sent the message
    pub role: MessageRole,
    /// Message text
    pub message: String,
    /// When the message was recorded
    pub timestamp: DateTime<Utc>,
    /// Catalog id of the model the message was addressed to or produced by
    pub model: String,
}

impl MessageRecord {
    /// Create a record stamped with the current time
    pub fn new(role: MessageRole, message: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            role,
            message: message.into(),
            timestamp: Utc::now(),
            model: model.into(),
        }
    }
}

/// Append-only message list that keeps only the newest records
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    records: VecDeque<MessageRecord>,
    capacity: usize,
}

impl ConversationHistory {
    /// Create an empty history holding at most [`MAX_HISTORY`] records
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Create an empty history with a custom cap
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, evicting the oldest ones beyond the cap
    pub fn push(&mut self, record: MessageRecord) {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// The newest `count` records, oldest first
    pub fn recent(&self, count: usize) -> Vec<MessageRecord> {
        let skip = self.records.len().saturating_sub(count);
        self.records.iter().skip(skip).cloned().collect()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been kept
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}
