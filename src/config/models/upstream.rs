//! Upstream selection

use super::*;
use serde::{Deserialize, Serialize};

/// Which gateway serves inference calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamMode {
    /// Sign and send requests to the Bedrock runtime directly
    #[default]
    Bedrock,
    /// Forward conversations to a self-hosted chat endpoint
    Remote,
}

impl std::str::FromStr for UpstreamMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bedrock" => Ok(UpstreamMode::Bedrock),
            "remote" => Ok(UpstreamMode::Remote),
            other => Err(format!("Unknown upstream mode: {}", other)),
        }
    }
}

/// Upstream configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub mode: UpstreamMode,
    /// Endpoint accepting `{ messages, modelId }`; required in remote mode
    pub remote_url: Option<String>,
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<(), String> {
        match (self.mode, &self.remote_url) {
            (UpstreamMode::Remote, None) => {
                Err("remote_url is required when upstream mode is remote".to_string())
            }
            (_, Some(url)) => url::Url::parse(url)
                .map(|_| ())
                .map_err(|e| format!("Invalid remote_url: {}", e)),
            _ => Ok(()),
        }
    }
}
