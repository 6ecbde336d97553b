//! Anthropic Claude Model Transformations

use crate::core::providers::bedrock::chat::GenerationParams;
use crate::core::types::{Message, MessageRole};
use serde_json::{Value, json};

/// Messages API version accepted by Claude on Bedrock
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Transform a history for Anthropic Claude models
///
/// The role-tagged history is forwarded as-is; only ids are dropped.
pub fn transform_request(history: &[Message], params: &GenerationParams) -> Value {
    let messages: Vec<Value> = history
        .iter()
        .map(|msg| {
            json!({
                "role": msg.role,
                "content": msg.content,
            })
        })
        .collect();

    json!({
        "messages": messages,
        "anthropic_version": ANTHROPIC_VERSION,
        "max_tokens": params.max_tokens,
        "temperature": params.temperature,
    })
}

/// Collapse a history into strictly alternating turns
///
/// Consecutive user turns are merged with a blank line between them; of
/// consecutive assistant turns only the last one is kept.
pub fn normalize_turns(history: &[Message]) -> Vec<Message> {
    let mut turns: Vec<Message> = Vec::with_capacity(history.len());

    for msg in history {
        match turns.last_mut() {
            Some(last) if last.role == msg.role => match msg.role {
                MessageRole::User => {
                    let merged = format!("{}\n\n{}", last.content, msg.content);
                    *last = Message {
                        id: last.id.clone(),
                        role: MessageRole::User,
                        content: merged,
                    };
                }
                MessageRole::Assistant => *last = msg.clone(),
            },
            _ => turns.push(msg.clone()),
        }
    }

    turns
}
