//! Conversation defaults

use super::*;
use crate::core::models::{DEFAULT_MODEL_ID, describe};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Chat configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Model selected for new conversations
    pub default_model: String,
    /// Merge consecutive same-role turns before sending to chat-family models
    pub merge_consecutive_roles: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL_ID.to_string(),
            merge_consecutive_roles: false,
        }
    }
}

impl Validate for ChatConfig {
    fn validate(&self) -> Result<(), String> {
        if self.default_model.trim().is_empty() {
            return Err("default_model cannot be empty".to_string());
        }
        if describe(&self.default_model).is_none() {
            warn!("Default model {} is not in the model list", self.default_model);
        }
        Ok(())
    }
}
