//! Model Family Classification for Bedrock Models
//!
//! Every Bedrock model id is sorted into exactly one adapted family. The
//! request and response adapters match on the family exhaustively, so an
//! unknown id can only ever reach the `Unsupported` arm.

use crate::core::providers::unified_provider::ProviderError;

/// Family markers in priority order. The first marker contained in a model id
/// wins, which also covers cross-region inference profiles such as
/// `us.anthropic.claude-3-haiku-20240307-v1:0`.
const FAMILY_MARKERS: &[(&str, ModelFamily)] = &[
    ("anthropic.claude", ModelFamily::Chat),
    ("amazon.titan", ModelFamily::PromptTitan),
    ("ai21.j2", ModelFamily::PromptJurassic),
];

/// Upstream request/response encoding conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Anthropic messages API: role-tagged history
    Chat,
    /// Amazon Titan text: flattened prompt under `inputText`
    PromptTitan,
    /// AI21 Jurassic-2: flattened prompt under `prompt`
    PromptJurassic,
    /// No adapter exists for this id
    Unsupported,
}

impl ModelFamily {
    /// Classify a model id
    pub fn classify(model_id: &str) -> Self {
        FAMILY_MARKERS
            .iter()
            .find(|(marker, _)| model_id.contains(marker))
            .map(|(_, family)| *family)
            .unwrap_or(ModelFamily::Unsupported)
    }

    /// Classify a model id, failing closed on unknown ids
    pub fn resolve(model_id: &str) -> Result<Self, ProviderError> {
        match Self::classify(model_id) {
            ModelFamily::Unsupported => Err(ProviderError::unsupported_model("bedrock", model_id)),
            family => Ok(family),
        }
    }

    /// Whether Bedrock offers `invoke-with-response-stream` for this family
    pub fn supports_streaming(&self) -> bool {
        matches!(self, ModelFamily::Chat | ModelFamily::PromptTitan)
    }

    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::Chat => "chat",
            ModelFamily::PromptTitan => "prompt-titan",
            ModelFamily::PromptJurassic => "prompt-jurassic",
            ModelFamily::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
