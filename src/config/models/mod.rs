//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod chat;
pub mod gateway;
pub mod logging;
pub mod server;
pub mod upstream;

// Re-export all configuration types
pub use chat::*;
pub use gateway::*;
pub use logging::*;
pub use server::*;
pub use upstream::*;

pub use crate::config::validation::Validate;
pub use crate::core::providers::bedrock::{BedrockConfig, GenerationParams};

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

fn default_true() -> bool {
    true
}
