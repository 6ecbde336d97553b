//! Chat Request and Response Adapters for Bedrock
//!
//! `build_request` encodes a conversation for the selected model family and
//! `extract_text` pulls the assistant answer back out of the raw response.

pub mod response;
pub mod transformations;

pub use response::{Extraction, NO_CONTENT_FALLBACK, extract_text};

use super::model_config::ModelFamily;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content type of every adapted body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Sampling parameters attached to every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

impl GenerationParams {
    /// Check the ranges Bedrock accepts for every adapted family
    pub fn validate(&self) -> Result<(), String> {
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0 and 1, got {}",
                self.temperature
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(format!("top_p must be between 0 and 1, got {}", self.top_p));
        }
        Ok(())
    }
}

/// Upstream body ready to be serialized, plus its content type
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedRequest {
    pub body: Value,
    pub content_type: &'static str,
    pub family: ModelFamily,
}

/// Build the upstream request for a history with default generation parameters
pub fn build_request(history: &[Message], model_id: &str) -> Result<AdaptedRequest, ProviderError> {
    build_request_with(history, model_id, &GenerationParams::default())
}

/// Build the upstream request for a history
pub fn build_request_with(
    history: &[Message],
    model_id: &str,
    params: &GenerationParams,
) -> Result<AdaptedRequest, ProviderError> {
    let family = ModelFamily::classify(model_id);
    let body = transformations::transform_for_model(history, model_id, family, params)?;

    Ok(AdaptedRequest {
        body,
        content_type: JSON_CONTENT_TYPE,
        family,
    })
}
