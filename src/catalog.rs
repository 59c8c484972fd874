//! Model catalog
//!
//! The fixed table of models the service advertises. Each entry carries the
//! response strategy used to answer messages addressed to it.

use crate::responder::Strategy;
use serde::Serialize;

/// Model used when a request does not name one
pub const DEFAULT_MODEL_ID: &str = "brad-ai-1.12.2x";

/// Static description of an advertised model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Catalog identifier (e.g. "brad-ai-1.12.2x")
    #[serde(skip)]
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Version label
    pub version: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Advertised context window in tokens
    pub context_length: u32,
    /// Training data size label (e.g. "570GB")
    pub training_data: &'static str,
    /// Parameter count label (e.g. "7B")
    pub parameters: &'static str,
    /// Release date, ISO 8601
    pub release_date: &'static str,
    /// Marketing feature list
    pub special_features: &'static [&'static str],
    /// How messages for this model are answered
    #[serde(skip)]
    pub strategy: Strategy,
}

/// All advertised models, in release order
pub const MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "brad-ai-1.12.2x",
        name: "Brad AI 1.12.2x",
        version: "1.12.2x",
        description: "Standard model with balanced performance",
        context_length: 4096,
        training_data: "570GB",
        parameters: "7B",
        release_date: "2023-11-15",
        special_features: &["General purpose", "Code generation", "Creative writing"],
        strategy: Strategy::Standard,
    },
    ModelDescriptor {
        id: "brad-ai-1.13.4r",
        name: "Brad AI 1.13.4r",
        version: "1.13.4r",
        description: "Reasoning-optimized model",
        context_length: 8192,
        training_data: "1.2TB",
        parameters: "13B",
        release_date: "2024-01-20",
        special_features: &[
            "Advanced reasoning",
            "Mathematical problem solving",
            "Logical analysis",
        ],
        strategy: Strategy::Reasoning,
    },
    ModelDescriptor {
        id: "brad-ai-2.0.1a",
        name: "Brad AI 2.0.1a",
        version: "2.0.1a",
        description: "Advanced model with ML capabilities",
        context_length: 16384,
        training_data: "2.3TB",
        parameters: "34B",
        release_date: "2024-03-10",
        special_features: &[
            "Machine learning integration",
            "Personalization",
            "Contextual understanding",
        ],
        strategy: Strategy::MlEnhanced,
    },
    ModelDescriptor {
        id: "brad-ai-2.1.3c",
        name: "Brad AI 2.1.3c",
        version: "2.1.3c",
        description: "Creative and conversational specialist",
        context_length: 4096,
        training_data: "890GB",
        parameters: "7B",
        release_date: "2024-04-05",
        special_features: &["Creative writing", "Conversational AI", "Story generation"],
        strategy: Strategy::Creative,
    },
    ModelDescriptor {
        id: "brad-ai-2.2.0m",
        name: "Brad AI 2.2.0m",
        version: "2.2.0m",
        description: "Multimodal and technical model",
        context_length: 32768,
        training_data: "3.1TB",
        parameters: "70B",
        release_date: "2024-05-15",
        special_features: &[
            "Technical documentation",
            "Research assistance",
            "Data analysis",
        ],
        strategy: Strategy::Technical,
    },
];

/// Look up a model by catalog id
pub fn find(model_id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|model| model.id == model_id)
}

/// Strategy for a model id, falling back to [`Strategy::Standard`] for
/// ids outside the catalog
pub fn strategy_for(model_id: &str) -> Strategy {
    find(model_id)
        .map(|model| model.strategy)
        .unwrap_or(Strategy::Standard)
}
