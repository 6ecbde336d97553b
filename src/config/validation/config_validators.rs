//! Validators for the gateway configuration sections

use super::trait_def::Validate;
use crate::config::models::{GatewayConfig, UpstreamMode};
use crate::core::providers::bedrock::{BedrockConfig, GenerationParams};

impl Validate for BedrockConfig {
    fn validate(&self) -> Result<(), String> {
        BedrockConfig::validate(self)
    }
}

impl Validate for GenerationParams {
    fn validate(&self) -> Result<(), String> {
        GenerationParams::validate(self)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        let sections: [(&str, &dyn Validate); 6] = [
            ("server", &self.server),
            ("bedrock", &self.bedrock),
            ("upstream", &self.upstream),
            ("generation", &self.generation),
            ("chat", &self.chat),
            ("logging", &self.logging),
        ];

        for (name, section) in sections {
            // The Bedrock section is unused when a remote gateway serves requests
            if name == "bedrock" && self.upstream.mode == UpstreamMode::Remote {
                continue;
            }
            section
                .validate()
                .map_err(|e| format!("{} config error: {}", name, e))?;
        }
        Ok(())
    }
}
