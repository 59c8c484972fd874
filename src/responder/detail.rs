//! Detail responder
//!
//! Classifies a message by keyword containment and returns the canned body
//! text shared by every strategy. Rules are evaluated in [`DETAIL_RULES`]
//! order and the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Message categories recognised by the detail responder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailCategory {
    /// "hello", "hi", "hey"
    Greeting,
    /// "how are you"
    WellBeing,
    /// Weather questions
    Weather,
    /// Joke requests
    Joke,
    /// Machine learning / AI questions
    MachineLearning,
    /// Programming questions
    Programming,
    /// "explain X", "what is X", "tell me about X"
    Explain,
    /// Nothing matched
    General,
}

/// Ordered classification rules, highest priority first
pub const DETAIL_RULES: &[(DetailCategory, &[&str])] = &[
    (DetailCategory::Greeting, &["hello", "hi", "hey"]),
    (DetailCategory::WellBeing, &["how are you", "how do you do"]),
    (DetailCategory::Weather, &["weather", "temperature"]),
    (DetailCategory::Joke, &["joke", "funny"]),
    (DetailCategory::MachineLearning, &["machine learning", "ml", "ai"]),
    (DetailCategory::Programming, &["python", "code", "programming"]),
    (DetailCategory::Explain, &["explain", "what is", "tell me about"]),
];

static EXPLAIN_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)explain|what is|tell me about").expect("explain pattern is a valid regex")
});

/// Classify a message; matching is case-insensitive substring containment
pub fn classify(message: &str) -> DetailCategory {
    let lowered = message.to_lowercase();
    DETAIL_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(DetailCategory::General)
}

/// Build the detail text for a message
pub fn detail_response(message: &str) -> String {
    match classify(message) {
        DetailCategory::Greeting => {
            "Hello! I'm Brad AI, ready to assist you with various tasks. How can I help you today?"
                .to_string()
        }
        DetailCategory::WellBeing => "I'm functioning optimally, thank you for asking! As an AI, \
            I don't have feelings, but I'm fully operational and ready to help with your queries."
            .to_string(),
        DetailCategory::Weather => "I don't have real-time weather data access, but I can help \
            you understand meteorological concepts or analyze weather patterns historically."
            .to_string(),
        DetailCategory::Joke => "Why don't scientists trust atoms?\nBecause they make up everything! \
            \n\nNow, how else can I assist you?"
            .to_string(),
        DetailCategory::MachineLearning => "Machine learning is a subset of artificial \
            intelligence that enables systems to learn and improve from experience without being \
            explicitly programmed. Key concepts include supervised learning, unsupervised \
            learning, neural networks, and deep learning. I can help explain these concepts in \
            detail!"
            .to_string(),
        DetailCategory::Programming => "I can help with Python programming! Here's a simple \
            example:\n```python\ndef greet(name):\n    return f'Hello, {name}!'\n\n\
            print(greet('User'))\n```\nWould you like help with a specific programming task?"
            .to_string(),
        DetailCategory::Explain => format!(
            "{} is a topic I can provide information about. \
             Would you like me to go into more specific details?",
            capitalize(&explain_subject(message))
        ),
        DetailCategory::General => format!(
            "I've received your message about '{}'. This appears to be a general inquiry. \
             I'm capable of helping with:\n\
             - Answering questions\n\
             - Providing explanations\n\
             - Generating creative content\n\
             - Assisting with technical topics\n\
             - Machine learning concepts\n\n\
             How would you like me to proceed with this topic?",
            message
        ),
    }
}

/// Strip the explain phrases from a message, leaving the subject
pub fn explain_subject(message: &str) -> String {
    EXPLAIN_PREFIX.replace_all(message, "").trim().to_string()
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(classify("Hey, tell me a joke"), DetailCategory::Greeting);
        assert_eq!(classify("How are you doing?"), DetailCategory::WellBeing);
        assert_eq!(classify("What's the temperature"), DetailCategory::Weather);
        assert_eq!(classify("tell a funny story"), DetailCategory::Joke);
        assert_eq!(classify("ML models"), DetailCategory::MachineLearning);
        assert_eq!(classify("python"), DetailCategory::Programming);
        assert_eq!(classify("what is entropy"), DetailCategory::Explain);
        assert_eq!(classify("why is the sky blue"), DetailCategory::General);
    }

    #[test]
    fn test_substring_matching_is_not_word_based() {
        // "this" contains "hi"
        assert_eq!(classify("explain this"), DetailCategory::Greeting);
        // "machine" contains "hi"
        assert_eq!(classify("machine learning"), DetailCategory::Greeting);
        // "contain" contains "ai"
        assert_eq!(classify("does it contain water"), DetailCategory::MachineLearning);
    }

    #[test]
    fn test_explain_subject_extraction() {
        assert_eq!(explain_subject("what is entropy"), "entropy");
        assert_eq!(explain_subject("Tell me about volcanoes"), "volcanoes");
        assert_eq!(explain_subject("explain"), "");
    }

    #[test]
    fn test_explain_response_capitalizes_subject() {
        let response = detail_response("what is entropy");
        assert!(response.starts_with("Entropy is a topic I can provide information about."));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("entropy"), "Entropy");
        assert_eq!(capitalize("gRAVITY waves"), "Gravity waves");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_general_response_echoes_message() {
        let response = detail_response("why is the sky blue");
        assert!(response.starts_with("I've received your message about 'why is the sky blue'."));
        assert!(response.contains("- Machine learning concepts"));
    }

    #[test]
    fn test_programming_response_contains_code_block() {
        let response = detail_response("help me write code");
        assert!(response.contains("```python\ndef greet(name):"));
    }
}
