//! Response Extraction
//!
//! Pulls the assistant text out of a family-specific response body. A body
//! without the expected shape never fails; it degrades to a visible
//! placeholder tagged as [`Extraction::Fallback`].

use crate::core::providers::bedrock::model_config::ModelFamily;
use serde_json::Value;

/// Placeholder shown when the response has no recognizable content
pub const NO_CONTENT_FALLBACK: &str = "Error: No content received";

/// Placeholder shown when the model id has no adapter
pub const UNSUPPORTED_MODEL_FALLBACK: &str = "Error: Unsupported model";

/// Outcome of reading assistant text from a raw response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Text found at the family's expected path
    Text(String),
    /// Expected path absent or malformed; carries the placeholder text
    Fallback(String),
}

impl Extraction {
    /// Text to render, whichever variant this is
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) | Extraction::Fallback(text) => text,
        }
    }

    /// Borrow the text to render
    pub fn as_text(&self) -> &str {
        match self {
            Extraction::Text(text) | Extraction::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }
}

/// Extract assistant text from a raw Bedrock response
pub fn extract_text(model_id: &str, raw: &Value) -> Extraction {
    let found = match ModelFamily::classify(model_id) {
        ModelFamily::Chat => claude_text(raw),
        ModelFamily::PromptTitan => titan_text(raw),
        ModelFamily::PromptJurassic => jurassic_text(raw),
        ModelFamily::Unsupported => {
            return Extraction::Fallback(UNSUPPORTED_MODEL_FALLBACK.to_string());
        }
    };

    match found {
        Some(text) if !text.is_empty() => Extraction::Text(text.to_string()),
        _ => Extraction::Fallback(NO_CONTENT_FALLBACK.to_string()),
    }
}

/// `content[0].text`, or the legacy text-completions `completion` field
fn claude_text(raw: &Value) -> Option<&str> {
    raw.get("content")
        .and_then(|content| content.get(0))
        .and_then(|block| block.get("text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .or_else(|| raw.get("completion").and_then(Value::as_str))
}

/// `results[0].outputText`
fn titan_text(raw: &Value) -> Option<&str> {
    raw.get("results")
        .and_then(|results| results.get(0))
        .and_then(|result| result.get("outputText"))
        .and_then(Value::as_str)
}

/// `completions[0].data.text`
fn jurassic_text(raw: &Value) -> Option<&str> {
    raw.get("completions")
        .and_then(|completions| completions.get(0))
        .and_then(|completion| completion.get("data"))
        .and_then(|data| data.get("text"))
        .and_then(Value::as_str)
}
