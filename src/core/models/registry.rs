//! Model Registry
//!
//! The fixed set of models a user can pick from, in the order the picker
//! shows them.

use serde::Serialize;

/// Display metadata for a selectable model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Bedrock model identifier
    pub id: &'static str,
    /// Human readable name
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// Model selected when a session starts
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

/// Model used by the single-message chat variant
pub const SINGLE_MESSAGE_MODEL_ID: &str = "amazon.titan-text-express-v1";

/// Token limit for the single-message chat variant
pub const SINGLE_MESSAGE_MAX_TOKENS: u32 = 1000;

static MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "anthropic.claude-3-sonnet-20240229-v1:0",
        display_name: "Claude 3 Sonnet",
        description: "Balance between intelligence and speed",
    },
    ModelDescriptor {
        id: "anthropic.claude-3-haiku-20240307-v1:0",
        display_name: "Claude 3 Haiku",
        description: "Fast and efficient",
    },
    ModelDescriptor {
        id: "amazon.titan-text-lite-v1",
        display_name: "Titan Text Lite",
        description: "Lightweight Amazon model",
    },
    ModelDescriptor {
        id: "amazon.titan-text-express-v1",
        display_name: "Titan Text Express",
        description: "Amazon express model",
    },
    ModelDescriptor {
        id: "ai21.j2-mid-v1",
        display_name: "Jurassic-2 Mid",
        description: "Mid-size AI21 model",
    },
];

/// All selectable models in declaration order
pub fn list_models() -> &'static [ModelDescriptor] {
    MODELS
}

/// Look up a model by id; `None` means "render nothing"
pub fn describe(id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|model| model.id == id)
}
