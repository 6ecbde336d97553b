//! Application state shared across HTTP handlers

use crate::config::{Config, UpstreamMode};
use crate::core::gateway::{BedrockGateway, InferenceGateway, RemoteGateway};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// HTTP server state shared across handlers
///
/// Holds the read-only configuration and the gateway every chat route talks
/// to. Both are behind `Arc` so cloning the state per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Upstream inference gateway
    pub gateway: Arc<dyn InferenceGateway>,
}

impl AppState {
    /// Create state from a configuration and an already built gateway
    pub fn new(config: Config, gateway: Arc<dyn InferenceGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }

    /// Create state, building the gateway selected by `upstream.mode`
    pub fn from_config(config: Config) -> Result<Self> {
        let gateway = build_gateway(&config)?;
        Ok(Self::new(config, gateway))
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Build the gateway for the configured upstream mode
pub fn build_gateway(config: &Config) -> Result<Arc<dyn InferenceGateway>> {
    let gateway: Arc<dyn InferenceGateway> = match config.upstream().mode {
        UpstreamMode::Bedrock => {
            info!(
                "Using Bedrock runtime in region {}",
                config.bedrock().aws_region
            );
            Arc::new(BedrockGateway::new(
                config.bedrock(),
                *config.generation(),
            )?)
        }
        UpstreamMode::Remote => {
            let url = config.upstream().remote_url.clone().ok_or_else(|| {
                GatewayError::Config("upstream.remote_url is required in remote mode".to_string())
            })?;
            info!("Using remote chat gateway at {}", url);
            Arc::new(RemoteGateway::new(
                url,
                Duration::from_secs(config.server().timeout),
            )?)
        }
    };
    Ok(gateway)
}
