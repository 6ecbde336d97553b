//! Bedrock HTTP Client
//!
//! Thin wrapper around reqwest with Bedrock-specific functionality
//! including AWS SigV4 signing and request routing.

use reqwest::{Client, Response};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error};

use super::chat::JSON_CONTENT_TYPE;
use super::config::BedrockConfig;
use super::error::{BedrockError, BedrockErrorMapper};
use super::sigv4::{SigV4Signer, uri_encode};
use super::utils::AwsAuth;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::error_mapper::ErrorMapper;

/// Runtime operation for a single reply
pub const INVOKE: &str = "invoke";
/// Runtime operation for an incremental reply
pub const INVOKE_STREAM: &str = "invoke-with-response-stream";

/// Bedrock HTTP client wrapper
#[derive(Debug, Clone)]
pub struct BedrockClient {
    http: Client,
    auth: AwsAuth,
    signer: SigV4Signer,
    base_url: String,
    error_mapper: BedrockErrorMapper,
}

impl BedrockClient {
    /// Create a new Bedrock client
    pub fn new(config: &BedrockConfig) -> Result<Self, BedrockError> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration("bedrock", e))?;

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProviderError::configuration("bedrock", e.to_string()))?;

        let auth = AwsAuth::resolve(config)?;
        auth.validate()?;

        let signer = SigV4Signer::from_credentials(auth.credentials());

        Ok(Self {
            http,
            auth,
            signer,
            base_url: config.runtime_base_url(),
            error_mapper: BedrockErrorMapper,
        })
    }

    /// Get the underlying HTTP client
    pub fn inner(&self) -> &Client {
        &self.http
    }

    /// Get AWS auth reference
    pub fn auth(&self) -> &AwsAuth {
        &self.auth
    }

    /// Get the error mapper
    pub fn error_mapper(&self) -> &BedrockErrorMapper {
        &self.error_mapper
    }

    /// Build Bedrock API URL for a model and operation
    pub fn build_url(&self, model_id: &str, operation: &str) -> String {
        format!(
            "{}/model/{}/{}",
            self.base_url,
            uri_encode(model_id),
            operation
        )
    }

    /// Create signed headers for AWS SigV4
    pub fn create_signed_headers(
        &self,
        url: &str,
        body: &str,
        method: &str,
        accept: &str,
    ) -> Result<reqwest::header::HeaderMap, BedrockError> {
        let timestamp = chrono::Utc::now();
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
        headers.insert("accept".to_string(), accept.to_string());

        let signed_headers = self
            .signer
            .sign_request(method, url, &headers, body, timestamp)
            .map_err(|e| {
                ProviderError::configuration("bedrock", format!("Signing failed: {}", e))
            })?;

        let mut header_map = reqwest::header::HeaderMap::new();
        for (key, value) in signed_headers {
            if let (Ok(header_name), Ok(header_value)) = (
                reqwest::header::HeaderName::from_bytes(key.as_bytes()),
                reqwest::header::HeaderValue::from_str(&value),
            ) {
                header_map.insert(header_name, header_value);
            }
        }

        Ok(header_map)
    }

    /// Send a request to Bedrock API
    pub async fn send_request(
        &self,
        model_id: &str,
        body: &Value,
    ) -> Result<Response, BedrockError> {
        self.post(model_id, INVOKE, body, JSON_CONTENT_TYPE).await
    }

    /// Send a streaming request to Bedrock API
    pub async fn send_streaming_request(
        &self,
        model_id: &str,
        body: &Value,
    ) -> Result<Response, BedrockError> {
        self.post(
            model_id,
            INVOKE_STREAM,
            body,
            "application/vnd.amazon.eventstream",
        )
        .await
    }

    async fn post(
        &self,
        model_id: &str,
        operation: &str,
        body: &Value,
        accept: &str,
    ) -> Result<Response, BedrockError> {
        let url = self.build_url(model_id, operation);
        let body_str = serde_json::to_string(body)
            .map_err(|e| ProviderError::serialization("bedrock", e.to_string()))?;

        debug!("Bedrock request: {} to {}", operation, url);
        debug!("Request body: {}", body_str);

        let headers = self.create_signed_headers(&url, &body_str, "POST", accept)?;

        let response = self
            .inner()
            .post(&url)
            .headers(headers)
            .body(body_str)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::timeout("bedrock", e.to_string())
                } else {
                    self.error_mapper.map_network_error(&e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Bedrock API error: {} - {}", status, error_body);
            return Err(match serde_json::from_str::<Value>(&error_body) {
                Ok(json) if json.get("message").is_some() || json.get("error").is_some() => {
                    self.error_mapper.map_json_error(&json)
                }
                _ => self.error_mapper.map_http_error(status, &error_body),
            });
        }

        Ok(response)
    }
}
