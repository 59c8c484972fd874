//! Static keyword tables used by the feature extractor
//!
//! The sentiment lexicon maps a lowercase word to an integer weight in
//! `[-3, 3]`. The topic table is an ordered rule list: topics are evaluated
//! top to bottom, so the order here is the order topics are reported in.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Largest absolute weight any lexicon entry carries
pub const MAX_WORD_WEIGHT: i32 = 3;

/// Word → weight pairs for sentiment scoring
const SENTIMENT_WORDS: &[(&str, i32)] = &[
    ("good", 1),
    ("great", 2),
    ("excellent", 3),
    ("bad", -1),
    ("terrible", -2),
    ("happy", 2),
    ("sad", -2),
    ("love", 3),
    ("hate", -3),
    ("like", 1),
    ("dislike", -1),
    ("awesome", 3),
    ("awful", -3),
    ("fantastic", 3),
    ("horrible", -3),
    ("wonderful", 2),
    ("perfect", 3),
    ("worst", -3),
];

static SENTIMENT_LEXICON: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| SENTIMENT_WORDS.iter().copied().collect());

/// Look up the sentiment weight of a lowercase token
pub fn word_weight(word: &str) -> Option<i32> {
    SENTIMENT_LEXICON.get(word).copied()
}

/// Topic tags the extractor can assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Computers, software, programming
    Technology,
    /// Research and experiments
    Science,
    /// Learning and schools
    Education,
    /// Companies and markets
    Business,
    /// Medicine and doctors
    Health,
    /// Movies, music, games
    Entertainment,
    /// Teams and players
    Sports,
    /// Cooking and meals
    Food,
}

impl Topic {
    /// Wire name of the topic
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Technology => "technology",
            Topic::Science => "science",
            Topic::Education => "education",
            Topic::Business => "business",
            Topic::Health => "health",
            Topic::Entertainment => "entertainment",
            Topic::Sports => "sports",
            Topic::Food => "food",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered topic rules: a topic matches when any keyword is a substring
/// of the lowercased text
pub const TOPIC_RULES: &[(Topic, &[&str])] = &[
    (
        Topic::Technology,
        &["computer", "software", "hardware", "code", "program", "tech"],
    ),
    (
        Topic::Science,
        &["science", "research", "experiment", "theory", "scientific"],
    ),
    (
        Topic::Education,
        &["learn", "study", "teach", "school", "university", "education"],
    ),
    (
        Topic::Business,
        &["business", "company", "market", "finance", "investment"],
    ),
    (
        Topic::Health,
        &["health", "medical", "doctor", "hospital", "medicine"],
    ),
    (
        Topic::Entertainment,
        &["movie", "music", "game", "entertainment", "fun"],
    ),
    (Topic::Sports, &["sport", "game", "team", "player", "score"]),
    (Topic::Food, &["food", "cook", "recipe", "meal", "restaurant"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_word_weight_lookup() {
        assert_eq!(word_weight("love"), Some(3));
        assert_eq!(word_weight("worst"), Some(-3));
        assert_eq!(word_weight("course"), None);
    }

    #[test]
    fn test_weights_within_bounds() {
        for (word, weight) in SENTIMENT_WORDS {
            assert!(
                weight.abs() <= MAX_WORD_WEIGHT,
                "{} has out-of-range weight {}",
                word,
                weight
            );
        }
    }

    #[test]
    fn test_topic_table_covers_every_topic_once() {
        let seen: HashSet<Topic> = TOPIC_RULES.iter().map(|(topic, _)| *topic).collect();
        assert_eq!(seen.len(), TOPIC_RULES.len());
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_topic_serializes_lowercase() {
        let json = serde_json::to_string(&Topic::Entertainment).unwrap();
        assert_eq!(json, r#""entertainment""#);
        assert_eq!(Topic::Food.to_string(), "food");
    }
}
