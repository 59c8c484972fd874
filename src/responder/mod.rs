//! Response generation
//!
//! Each catalog model answers through one [`Strategy`]. A strategy prepends
//! its own framing and then appends the shared [`detail::detail_response`].
//! Template variants are picked uniformly at random from a caller-supplied
//! [`Rng`], so tests can seed the choice.

pub mod detail;

use crate::analysis::FeatureSet;
use crate::state::MessageRecord;
use rand::Rng;

pub use detail::{detail_response, DetailCategory};

/// Intro variants for the standard strategy; `{}` is replaced by the message
const STANDARD_INTROS: &[&str] = &[
    "I've analyzed your query about '{}'. Based on my training, I can provide detailed information on this topic.",
    "I understand you're asking: {}. Let me break this down for you.",
    "Thank you for your question. I'll provide a comprehensive response about this subject.",
    "I can help with that! Here's what I know about '{}'.",
    "Based on your query, I'd like to share some insights.",
];

/// Intro variants for the creative strategy
const CREATIVE_INTROS: &[&str] = &[
    "What an interesting question! Let me weave some insights together...",
    "I love this topic! Here's a creative take on it:",
    "From a creative perspective, here's how I see it:",
    "Let me craft a thoughtful response for you:",
];

/// Opening line of every reasoning response
pub const REASONING_PREAMBLE: &str = "Let me reason through this step by step:";

/// How a model frames its answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Random generic intro
    Standard,
    /// Numbered reasoning steps
    Reasoning,
    /// Sentiment/topic-aware personalization line
    MlEnhanced,
    /// Random creative intro
    Creative,
    /// Structured technical header
    Technical,
}

/// Generate the full response text for `message`
///
/// `context` holds the most recent records of the conversation, including
/// the message being answered. No current strategy reads it.
pub fn respond<R: Rng>(
    message: &str,
    strategy: Strategy,
    _context: &[MessageRecord],
    features: &FeatureSet,
    rng: &mut R,
) -> String {
    let detail = detail_response(message);
    match strategy {
        Strategy::Standard => standard(message, &detail, rng),
        Strategy::Reasoning => reasoning(message, &detail),
        Strategy::MlEnhanced => ml_enhanced(features, &detail),
        Strategy::Creative => creative(&detail, rng),
        Strategy::Technical => technical(message, &detail),
    }
}

fn pick<'a, R: Rng>(variants: &[&'a str], rng: &mut R) -> &'a str {
    variants[rng.gen_range(0..variants.len())]
}

fn standard<R: Rng>(message: &str, detail: &str, rng: &mut R) -> String {
    let intro = pick(STANDARD_INTROS, rng).replace("{}", message);
    format!("{}\n\n{}", intro, detail)
}

fn reasoning(message: &str, detail: &str) -> String {
    format!(
        "{}\n\n\
         1. Understanding the query: {}\n\
         2. Breaking down components\n\
         3. Analyzing relationships\n\
         4. Drawing conclusions\n\n\
         Based on logical analysis, here's my response:\n{}",
        REASONING_PREAMBLE, message, detail
    )
}

fn ml_enhanced(features: &FeatureSet, detail: &str) -> String {
    let mut personalized = format!(
        "I notice this query has a {} sentiment",
        features.sentiment_label
    );
    if !features.topics.is_empty() {
        let topics: Vec<&str> = features.topics.iter().take(3).map(|t| t.as_str()).collect();
        personalized.push_str(&format!(" and relates to {}", topics.join(", ")));
    }
    format!(
        "{}.\n\nAs Brad AI 2.0.1a with machine learning capabilities, \
         I've analyzed your query pattern. {}",
        personalized, detail
    )
}

fn creative<R: Rng>(detail: &str, rng: &mut R) -> String {
    format!("{}\n\n{}", pick(CREATIVE_INTROS, rng), detail)
}

fn technical(message: &str, detail: &str) -> String {
    format!(
        "**Technical Analysis of: {}**\n\n\
         **Key Components:**\n\
         - Query classification\n\
         - Contextual analysis\n\
         - Data correlation\n\
         - Inference generation\n\n\
         **Response:**\n{}",
        message, detail
    )
}
