//! Lexical feature extraction
//!
//! Derives sentiment, topics, complexity and word statistics from raw text.
//! Everything here is a pure function of the input and the static tables in
//! [`super::lexicon`]; empty input yields zeroed, neutral features.

use super::lexicon::{word_weight, Topic, MAX_WORD_WEIGHT, TOPIC_RULES};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum number of topics reported for one message
pub const MAX_TOPICS: usize = 3;

/// Scores strictly above this are positive, strictly below its negation negative
pub const SENTIMENT_THRESHOLD: f64 = 0.1;

/// Words longer than this many characters count as "long" for complexity
const LONG_WORD_CHARS: usize = 6;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"));

/// Sentiment classification of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Score above the threshold
    Positive,
    /// Score below the negated threshold
    Negative,
    /// Anything in between, including exactly ±threshold
    Neutral,
}

impl Sentiment {
    /// Classify a score in `[-1, 1]`
    pub fn from_score(score: f64) -> Self {
        if score > SENTIMENT_THRESHOLD {
            Sentiment::Positive
        } else if score < -SENTIMENT_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Wire name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Features extracted from a single message
///
/// Serialized with the field names clients already consume
/// (`sentiment`, `unique_words`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Length in characters
    pub length: usize,
    /// Whitespace-delimited word count
    pub word_count: usize,
    /// Sentiment classification
    #[serde(rename = "sentiment")]
    pub sentiment_label: Sentiment,
    /// Normalized sentiment score in `[-1, 1]`
    pub sentiment_score: f64,
    /// Up to three matched topics, in table order
    pub topics: Vec<Topic>,
    /// Complexity estimate in `[0, 1]`
    pub complexity: f64,
    /// Whether the text contains `?`
    pub has_question: bool,
    /// Whether the text contains `!`
    pub has_exclamation: bool,
    /// Number of distinct lowercased words
    #[serde(rename = "unique_words")]
    pub unique_word_count: usize,
    /// Mean word length in characters (0 with no words)
    pub avg_word_length: f64,
}

/// Extract the full feature set from `text`
pub fn extract(text: &str) -> FeatureSet {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentiment_score = sentiment_score(text);

    let unique_word_count = words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let total: usize = words.iter().map(|word| word.chars().count()).sum();
        total as f64 / words.len() as f64
    };

    FeatureSet {
        length: text.chars().count(),
        word_count: words.len(),
        sentiment_label: Sentiment::from_score(sentiment_score),
        sentiment_score,
        topics: extract_topics(text),
        complexity: complexity(text),
        has_question: text.contains('?'),
        has_exclamation: text.contains('!'),
        unique_word_count,
        avg_word_length,
    }
}

/// Classify the sentiment of `text`
pub fn analyze_sentiment(text: &str) -> Sentiment {
    Sentiment::from_score(sentiment_score(text))
}

/// Mean lexicon weight of matched tokens, normalized by the maximum weight
///
/// Returns 0 when no token is in the lexicon.
pub fn sentiment_score(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let (total, matched) = WORD_PATTERN
        .find_iter(&lowered)
        .filter_map(|token| word_weight(token.as_str()))
        .fold((0i32, 0i32), |(total, matched), weight| {
            (total + weight, matched + 1)
        });

    if matched == 0 {
        return 0.0;
    }
    f64::from(total) / f64::from(matched * MAX_WORD_WEIGHT)
}

/// Topics whose keywords occur in `text`, first [`MAX_TOPICS`] in table order
pub fn extract_topics(text: &str) -> Vec<Topic> {
    let lowered = text.to_lowercase();
    TOPIC_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(topic, _)| *topic)
        .take(MAX_TOPICS)
        .collect()
}

/// Words per sentence (weighted 0.3) plus share of long words (weighted 0.7),
/// capped at 1.0
pub fn complexity(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let long_words = words
        .iter()
        .filter(|word| word.chars().count() > LONG_WORD_CHARS)
        .count();
    let sentences = text
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
        .max(1);

    let per_sentence = words.len() as f64 / sentences as f64;
    let long_share = long_words as f64 / words.len() as f64;
    (per_sentence * 0.3 + long_share * 0.7).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "I love this course, it's great!",
        "This is the worst, most horrible, awful day.",
        "good bad",
        "Tell me about the hospital's new medical research program and its market.",
        "Héllo wörld, ça va? Ünïcode everywhere!!!",
        "a.b.c.d.e.f",
        "Supercalifragilisticexpialidocious",
    ];

    #[test]
    fn test_empty_text_is_neutral_and_zeroed() {
        let features = extract("");
        assert_eq!(features.length, 0);
        assert_eq!(features.word_count, 0);
        assert_eq!(features.sentiment_label, Sentiment::Neutral);
        assert_eq!(features.sentiment_score, 0.0);
        assert_eq!(features.complexity, 0.0);
        assert!(features.topics.is_empty());
        assert_eq!(features.unique_word_count, 0);
        assert_eq!(features.avg_word_length, 0.0);
        assert!(!features.has_question);
        assert!(!features.has_exclamation);
    }

    #[test]
    fn test_positive_message_without_listed_topic_keywords() {
        let features = extract("I love this course, it's great!");
        // love (3) + great (2) over 2 matches * 3
        assert!((features.sentiment_score - 5.0 / 6.0).abs() < 1e-9);
        assert_eq!(features.sentiment_label, Sentiment::Positive);
        assert!(features.topics.is_empty());
        assert!(features.has_exclamation);
        assert!(!features.has_question);
    }

    #[test]
    fn test_negative_message() {
        let features = extract("I hate this, it is terrible");
        assert!(features.sentiment_score < 0.0);
        assert_eq!(features.sentiment_label, Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_tokens_respect_word_boundaries() {
        // "likely" and "goodness" are not lexicon entries
        assert_eq!(sentiment_score("likely goodness"), 0.0);
        assert_eq!(sentiment_score("GOOD"), 1.0 / 3.0);
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        assert_eq!(Sentiment::from_score(0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.1001), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(-0.1001), Sentiment::Negative);
    }

    #[test]
    fn test_balanced_sentiment_is_neutral() {
        // like (1) + dislike (-1)
        assert_eq!(analyze_sentiment("I like and dislike it"), Sentiment::Neutral);
    }

    #[test]
    fn test_score_and_label_consistent_for_samples() {
        for text in SAMPLES {
            let features = extract(text);
            assert!(
                (-1.0..=1.0).contains(&features.sentiment_score),
                "score out of range for {:?}",
                text
            );
            assert_eq!(
                features.sentiment_label,
                Sentiment::from_score(features.sentiment_score)
            );
            assert_eq!(analyze_sentiment(text), features.sentiment_label);
        }
    }

    #[test]
    fn test_topics_capped_and_ordered() {
        let topics = extract_topics(
            "software research at the university, a business about health and music",
        );
        assert_eq!(
            topics,
            vec![Topic::Technology, Topic::Science, Topic::Education]
        );
    }

    #[test]
    fn test_topic_match_is_substring() {
        // "program" inside "programming", "fun" inside "funny"
        assert_eq!(extract_topics("PROGRAMMING"), vec![Topic::Technology]);
        assert_eq!(extract_topics("so funny"), vec![Topic::Entertainment]);
    }

    #[test]
    fn test_shared_keyword_matches_both_topics() {
        assert_eq!(
            extract_topics("a game"),
            vec![Topic::Entertainment, Topic::Sports]
        );
    }

    #[test]
    fn test_topics_bounded_for_samples() {
        for text in SAMPLES {
            let topics = extract(text).topics;
            assert!(topics.len() <= MAX_TOPICS);
            let unique: HashSet<_> = topics.iter().collect();
            assert_eq!(unique.len(), topics.len());
        }
    }

    #[test]
    fn test_complexity_formula() {
        // 4 words, 1 sentence, 1 long word: 4 * 0.3 capped
        assert_eq!(complexity("one two three elephants."), 1.0);
        // 2 words, 2 sentences, no long words: 1 * 0.3
        assert!((complexity("Hi. Yo.") - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_bounded_for_samples() {
        for text in SAMPLES {
            let value = complexity(text);
            assert!((0.0..=1.0).contains(&value), "{} for {:?}", value, text);
        }
    }

    #[test]
    fn test_word_statistics() {
        let features = extract("The cat the CAT sat?");
        assert_eq!(features.word_count, 5);
        assert_eq!(features.unique_word_count, 3);
        assert_eq!(features.length, 20);
        assert!((features.avg_word_length - 16.0 / 5.0).abs() < 1e-9);
        assert!(features.has_question);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(extract("ça").length, 2);
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(extract("Great code?")).unwrap();
        assert_eq!(value["sentiment"], "positive");
        assert_eq!(value["unique_words"], 2);
        assert_eq!(value["topics"][0], "technology");
        assert_eq!(value["has_question"], true);
    }
}
