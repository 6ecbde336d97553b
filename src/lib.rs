//! # Bedrock Chat
//!
//! A chat service for Amazon Bedrock foundation models. A conversation is
//! adapted to the request shape of the selected model family (Claude
//! messages, Titan prompts, Jurassic prompts), sent to the Bedrock runtime
//! with SigV4 signing, and the reply text is extracted again per family.
//!
//! ## Features
//!
//! - **Model Registry**: a fixed, ordered list of selectable models
//! - **Request/Response Adapters**: one closed `ModelFamily` drives both directions
//! - **Unary and Streaming**: `invoke` and `invoke-with-response-stream`,
//!   with AWS event-stream decoding
//! - **Conversation Session**: single in-flight turn, reset-safe
//! - **HTTP Surface**: `/api/chat`, `/api/chat/stream` (SSE), `/api/models`
//!
//! ## Session Usage
//!
//! ```rust,no_run
//! use bedrock_chat::{BedrockGateway, Config, ConversationSession, SendOutcome};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     let gateway = BedrockGateway::new(config.bedrock(), *config.generation())?;
//!     let session = ConversationSession::with_default_model(Arc::new(gateway));
//!
//!     if let SendOutcome::Replied(reply) = session.send("Hello!").await {
//!         println!("{}", reply.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use bedrock_chat::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     server::builder::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

// Export domain types
pub use core::gateway::{
    BedrockGateway, FragmentStream, InferenceGateway, RemoteGateway, StreamEvent,
    collect_fragments,
};
pub use core::models::{DEFAULT_MODEL_ID, ModelDescriptor, describe, list_models};
pub use core::providers::ProviderError;
pub use core::providers::bedrock::{
    AdaptedRequest, Extraction, GenerationParams, ModelFamily, build_request, extract_text,
};
pub use core::session::{ConversationSession, ConversationState, RejectReason, SendOutcome};
pub use core::types::{Message, MessageRole};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
