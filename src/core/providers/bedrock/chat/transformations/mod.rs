//! Model-specific Request Transformations
//!
//! Turns a conversation history into the body each model family expects.

pub mod ai21;
pub mod amazon;
pub mod anthropic;

use super::GenerationParams;
use crate::core::providers::bedrock::model_config::ModelFamily;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::Message;
use serde_json::Value;

/// Transform a history based on model family
pub fn transform_for_model(
    history: &[Message],
    model_id: &str,
    family: ModelFamily,
    params: &GenerationParams,
) -> Result<Value, ProviderError> {
    match family {
        ModelFamily::Chat => Ok(anthropic::transform_request(history, params)),
        ModelFamily::PromptTitan => Ok(amazon::transform_titan_request(history, params)),
        ModelFamily::PromptJurassic => Ok(ai21::transform_jurassic_request(history, params)),
        ModelFamily::Unsupported => Err(ProviderError::unsupported_model("bedrock", model_id)),
    }
}

/// Flatten a history into a `Human:`/`Assistant:` transcript ending with an
/// open assistant turn
pub fn messages_to_prompt(history: &[Message]) -> String {
    let mut prompt = history
        .iter()
        .map(|message| format!("{}: {}", message.role.speaker(), message.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    prompt.push_str("\n\nAssistant:");
    prompt
}
