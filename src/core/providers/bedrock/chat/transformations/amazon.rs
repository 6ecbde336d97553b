//! Amazon Titan Model Transformations

use crate::core::providers::bedrock::chat::GenerationParams;
use crate::core::types::Message;
use serde_json::{Value, json};

/// Transform a history for Amazon Titan text models
pub fn transform_titan_request(history: &[Message], params: &GenerationParams) -> Value {
    let prompt = super::messages_to_prompt(history);
    titan_body(prompt, params)
}

/// Titan body for a bare prompt, without transcript flattening
pub fn transform_titan_prompt(input_text: &str, params: &GenerationParams) -> Value {
    titan_body(input_text.to_string(), params)
}

fn titan_body(input_text: String, params: &GenerationParams) -> Value {
    json!({
        "inputText": input_text,
        "textGenerationConfig": {
            "maxTokenCount": params.max_tokens,
            "temperature": params.temperature,
            "topP": params.top_p,
        }
    })
}
