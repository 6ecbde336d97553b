//! AWS Bedrock Provider
//!
//! Direct access to Bedrock runtime foundation models: model family
//! classification, request/response adapters, AWS SigV4 signing and
//! event-stream decoding.

// Core modules
mod client;
mod config;
mod error;
mod model_config;
mod sigv4;
mod utils;

// Feature modules
pub mod chat;
pub mod streaming;

// Re-export main types for external use
pub use chat::{
    AdaptedRequest, Extraction, GenerationParams, JSON_CONTENT_TYPE, NO_CONTENT_FALLBACK,
    build_request, build_request_with, extract_text,
};
pub use chat::transformations::amazon::transform_titan_prompt;
pub use chat::transformations::anthropic::normalize_turns;
pub use client::{BedrockClient, INVOKE, INVOKE_STREAM};
pub use config::BedrockConfig;
pub use error::{BedrockError, BedrockErrorMapper};
pub use model_config::ModelFamily;
pub use sigv4::SigV4Signer;
pub use streaming::BedrockStream;
pub use utils::{AWS_REGIONS, AwsAuth, AwsCredentials, validate_region};
