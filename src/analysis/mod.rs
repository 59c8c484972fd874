//! Text analysis module
//!
//! Keyword-based heuristics: sentiment scoring, topic tagging and
//! complexity estimation.

pub mod features;
pub mod lexicon;

pub use features::{extract, FeatureSet, Sentiment};
pub use lexicon::Topic;
