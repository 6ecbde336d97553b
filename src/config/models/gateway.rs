//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};
use std::env;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// AWS Bedrock settings
    #[serde(default)]
    pub bedrock: BedrockConfig,
    /// Upstream selection
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Sampling parameters
    #[serde(default)]
    pub generation: GenerationParams,
    /// Conversation defaults
    #[serde(default)]
    pub chat: ChatConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Defaults overlaid with environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay the environment variables that are set
    ///
    /// AWS credentials are not copied here; they are resolved from the
    /// environment when the Bedrock client is built.
    pub fn apply_env(&mut self) -> crate::utils::error::Result<()> {
        use crate::utils::error::GatewayError;

        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        if let Ok(region) = env::var("AWS_REGION").or_else(|_| env::var("AWS_DEFAULT_REGION")) {
            self.bedrock.aws_region = region;
        }
        if let Ok(endpoint) = env::var("BEDROCK_ENDPOINT_URL") {
            self.bedrock.endpoint_url = Some(endpoint);
        }
        if let Ok(mode) = env::var("UPSTREAM_MODE") {
            self.upstream.mode = mode.parse().map_err(GatewayError::Config)?;
        }
        if let Ok(url) = env::var("REMOTE_GATEWAY_URL") {
            self.upstream.remote_url = Some(url);
        }
        if let Ok(model) = env::var("DEFAULT_MODEL") {
            self.chat.default_model = model;
        }
        Ok(())
    }
}
