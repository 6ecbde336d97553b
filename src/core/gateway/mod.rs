//! Inference gateway abstraction
//!
//! A gateway sends a full conversation to a hosted model and returns either
//! the complete answer or a lazy sequence of answer fragments. Each call makes
//! exactly one upstream request and is never retried.

pub mod bedrock;
pub mod remote;

pub use bedrock::BedrockGateway;
pub use remote::RemoteGateway;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::Message;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::pin::Pin;

/// One item of an incremental answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A non-empty piece of answer text, in arrival order
    Fragment(String),
    /// The upstream signalled the end of the answer; yielded at most once
    Done,
}

/// Finite, non-restartable fragment sequence. Nothing follows `Done` or an error.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, ProviderError>> + Send>>;

/// Upstream model access used by the session and the HTTP surface
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Send `history` to `model_id` and return the extracted answer text
    async fn invoke(&self, history: &[Message], model_id: &str) -> Result<String, ProviderError>;

    /// Send `history` to `model_id` and return the answer as it is produced
    async fn invoke_streaming(
        &self,
        history: &[Message],
        model_id: &str,
    ) -> Result<FragmentStream, ProviderError>;

    /// Answer a single free-standing message with the fixed single-message model
    async fn invoke_single(&self, message: &str) -> Result<String, ProviderError>;
}

/// Drain a fragment stream into the full answer text
///
/// Fails on the first error item and when the stream ends without `Done`.
pub async fn collect_fragments(mut stream: FragmentStream) -> Result<String, ProviderError> {
    let mut text = String::new();
    while let Some(event) = stream.next().await {
        match event? {
            StreamEvent::Fragment(fragment) => text.push_str(&fragment),
            StreamEvent::Done => return Ok(text),
        }
    }
    Err(ProviderError::streaming(
        "gateway",
        None,
        "stream ended before the end marker",
    ))
}
