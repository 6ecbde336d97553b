//! Upstream model providers

pub mod bedrock;
pub mod unified_provider;

pub use unified_provider::ProviderError;
