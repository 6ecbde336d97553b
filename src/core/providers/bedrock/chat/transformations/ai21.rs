//! AI21 Labs Jurassic Model Transformations

use crate::core::providers::bedrock::chat::GenerationParams;
use crate::core::types::Message;
use serde_json::{Value, json};

/// Transform a history for Jurassic-2 models
pub fn transform_jurassic_request(history: &[Message], params: &GenerationParams) -> Value {
    let prompt = super::messages_to_prompt(history);

    json!({
        "prompt": prompt,
        "maxTokens": params.max_tokens,
        "temperature": params.temperature,
        "topP": params.top_p,
    })
}
