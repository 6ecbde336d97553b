//! Gateway backed by a self-hosted chat endpoint
//!
//! The remote side owns the AWS credentials; this client only forwards the
//! conversation as `{ messages, modelId }` and reads `{ response }` back.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

use super::{FragmentStream, InferenceGateway};
use crate::core::models::SINGLE_MESSAGE_MODEL_ID;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::Message;

/// Text used when the remote reply has no `response` field
pub const NO_RESPONSE_FALLBACK: &str = "Error: No response received";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoteRequest<'a> {
    messages: &'a [Message],
    model_id: &'a str,
}

/// Unary-only gateway that posts conversations to a fixed URL
#[derive(Debug, Clone)]
pub struct RemoteGateway {
    http: Client,
    url: String,
}

impl RemoteGateway {
    /// Create a gateway for `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let url = url.into();
        url::Url::parse(&url).map_err(|e| {
            ProviderError::configuration("remote", format!("Invalid remote URL: {}", e))
        })?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::configuration("remote", e.to_string()))?;

        Ok(Self { http, url })
    }

    /// Target URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl InferenceGateway for RemoteGateway {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn invoke(&self, history: &[Message], model_id: &str) -> Result<String, ProviderError> {
        info!("Forwarding {} messages for {} to {}", history.len(), model_id, self.url);

        let response = self
            .http
            .post(&self.url)
            .json(&RemoteRequest {
                messages: history,
                model_id,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::timeout("remote", e.to_string())
                } else {
                    ProviderError::network("remote", e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Remote gateway error: {} - {}", status, body);
            return Err(ProviderError::api_error(
                "remote",
                status.as_u16(),
                format!("HTTP {}: {}", status.as_u16(), body),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::response_parsing("remote", e.to_string()))?;

        Ok(body
            .get("response")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_RESPONSE_FALLBACK)
            .to_string())
    }

    async fn invoke_streaming(
        &self,
        _history: &[Message],
        _model_id: &str,
    ) -> Result<FragmentStream, ProviderError> {
        Err(ProviderError::not_supported("remote", "streaming"))
    }

    async fn invoke_single(&self, message: &str) -> Result<String, ProviderError> {
        self.invoke(&[Message::user(message)], SINGLE_MESSAGE_MODEL_ID)
            .await
    }
}
