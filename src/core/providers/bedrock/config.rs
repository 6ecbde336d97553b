//! Bedrock Provider Configuration
//!
//! AWS credentials, region and transport settings for the Bedrock runtime.

use super::utils::region::validate_region;
use serde::{Deserialize, Serialize};

/// AWS Bedrock provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockConfig {
    /// AWS access key ID; read from the environment when empty
    pub aws_access_key_id: String,
    /// AWS secret access key; read from the environment when empty
    pub aws_secret_access_key: String,
    /// AWS session token (optional, for temporary credentials)
    pub aws_session_token: Option<String>,
    /// AWS region
    pub aws_region: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Runtime endpoint override, e.g. a VPC endpoint or a local mock
    pub endpoint_url: Option<String>,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            aws_access_key_id: String::new(),
            aws_secret_access_key: String::new(),
            aws_session_token: None,
            aws_region: "us-east-1".to_string(),
            timeout_seconds: 30,
            endpoint_url: None,
        }
    }
}

impl BedrockConfig {
    /// Validate the settings that do not depend on credentials
    pub fn validate(&self) -> Result<(), String> {
        if self.aws_region.is_empty() {
            return Err("AWS region is required".to_string());
        }
        if self.endpoint_url.is_none() {
            validate_region(&self.aws_region).map_err(|e| e.to_string())?;
        }
        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        if let Some(endpoint) = &self.endpoint_url {
            url::Url::parse(endpoint).map_err(|e| format!("Invalid endpoint URL: {}", e))?;
        }
        Ok(())
    }

    /// Whether explicit credentials were configured
    pub fn has_credentials(&self) -> bool {
        !self.aws_access_key_id.is_empty() && !self.aws_secret_access_key.is_empty()
    }

    /// Request timeout
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }

    /// Base URL of the runtime API
    pub fn runtime_base_url(&self) -> String {
        match &self.endpoint_url {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.aws_region),
        }
    }
}
