//! Direct Bedrock runtime gateway

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{FragmentStream, InferenceGateway};
use crate::core::models::{SINGLE_MESSAGE_MAX_TOKENS, SINGLE_MESSAGE_MODEL_ID};
use crate::core::providers::bedrock::{
    BedrockClient, BedrockConfig, BedrockStream, GenerationParams, build_request_with,
    extract_text, transform_titan_prompt,
};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ErrorMapper;
use crate::core::types::Message;

/// Gateway that signs and sends requests straight to the Bedrock runtime
#[derive(Debug, Clone)]
pub struct BedrockGateway {
    client: BedrockClient,
    params: GenerationParams,
}

impl BedrockGateway {
    /// Create a gateway from AWS settings and sampling parameters
    pub fn new(config: &BedrockConfig, params: GenerationParams) -> Result<Self, ProviderError> {
        Ok(Self {
            client: BedrockClient::new(config)?,
            params,
        })
    }

    async fn invoke_body(&self, model_id: &str, body: &Value) -> Result<String, ProviderError> {
        let response = self.client.send_request(model_id, body).await?;
        let raw: Value = response
            .json()
            .await
            .map_err(|e| self.client.error_mapper().map_parsing_error(&e))?;

        let extraction = extract_text(model_id, &raw);
        if extraction.is_fallback() {
            warn!("No content found in {} response", model_id);
            debug!("Raw response: {}", raw);
        }
        Ok(extraction.into_text())
    }
}

#[async_trait]
impl InferenceGateway for BedrockGateway {
    fn name(&self) -> &'static str {
        "bedrock"
    }

    async fn invoke(&self, history: &[Message], model_id: &str) -> Result<String, ProviderError> {
        let request = build_request_with(history, model_id, &self.params)?;
        info!(
            "Invoking {} ({} family, {} messages)",
            model_id,
            request.family,
            history.len()
        );
        self.invoke_body(model_id, &request.body).await
    }

    async fn invoke_streaming(
        &self,
        history: &[Message],
        model_id: &str,
    ) -> Result<FragmentStream, ProviderError> {
        let request = build_request_with(history, model_id, &self.params)?;
        if !request.family.supports_streaming() {
            return Err(ProviderError::not_supported(
                "bedrock",
                format!("streaming for {} models", request.family),
            ));
        }

        info!(
            "Streaming {} ({} family, {} messages)",
            model_id,
            request.family,
            history.len()
        );
        let response = self
            .client
            .send_streaming_request(model_id, &request.body)
            .await?;

        Ok(Box::pin(BedrockStream::new(
            response.bytes_stream(),
            request.family,
        )))
    }

    async fn invoke_single(&self, message: &str) -> Result<String, ProviderError> {
        let params = GenerationParams {
            max_tokens: SINGLE_MESSAGE_MAX_TOKENS,
            ..self.params
        };
        let body = transform_titan_prompt(message, &params);
        info!("Invoking {} with a single message", SINGLE_MESSAGE_MODEL_ID);
        self.invoke_body(SINGLE_MESSAGE_MODEL_ID, &body).await
    }
}
