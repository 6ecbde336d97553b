//! Bedrock Provider Error Handling
//!
//! Error mapping for AWS Bedrock runtime responses.

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::error_mapper::ErrorMapper;
use serde_json::Value;

/// Bedrock-specific error type (alias for ProviderError)
pub type BedrockError = ProviderError;

/// Error mapper for Bedrock provider
#[derive(Debug, Clone, Default)]
pub struct BedrockErrorMapper;

impl BedrockErrorMapper {
    /// Map a Bedrock exception name (`ValidationException`, ...) and message
    ///
    /// Event-stream frames spell the name in camel case (`throttlingException`).
    pub fn map_exception(&self, code: &str, message: &str) -> BedrockError {
        let mut chars = code.chars();
        let normalized = match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        };
        match normalized.as_str() {
            "ValidationException" => {
                ProviderError::invalid_request("bedrock", format!("Validation error: {}", message))
            }
            "AccessDeniedException" | "UnrecognizedClientException" => {
                ProviderError::authentication("bedrock", message.to_string())
            }
            "ThrottlingException" | "ServiceQuotaExceededException" => {
                ProviderError::rate_limit("bedrock", None)
            }
            "ResourceNotFoundException" | "ModelNotReadyException" => {
                ProviderError::model_not_found("bedrock", message.to_string())
            }
            "ModelTimeoutException" => ProviderError::timeout("bedrock", message.to_string()),
            "ModelStreamErrorException" => {
                ProviderError::streaming("bedrock", None, message.to_string())
            }
            "InternalServerException" | "ServiceUnavailableException" => ProviderError::api_error(
                "bedrock",
                503,
                format!("{}: {}", code, message),
            ),
            _ => ProviderError::api_error("bedrock", 400, format!("{}: {}", code, message)),
        }
    }
}

impl ErrorMapper for BedrockErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> BedrockError {
        match status_code {
            400 => {
                ProviderError::invalid_request("bedrock", format!("Bad request: {}", response_body))
            }
            401 => ProviderError::authentication(
                "bedrock",
                "Invalid AWS credentials or insufficient permissions".to_string(),
            ),
            403 => ProviderError::authentication(
                "bedrock",
                format!("Access forbidden: {}", response_body),
            ),
            404 => ProviderError::model_not_found(
                "bedrock",
                "Model not found or not available in region".to_string(),
            ),
            429 => ProviderError::rate_limit("bedrock", None),
            408 => ProviderError::timeout("bedrock", response_body.to_string()),
            _ => ProviderError::api_error(
                "bedrock",
                status_code,
                format!("HTTP {}: {}", status_code, response_body),
            ),
        }
    }

    fn map_json_error(&self, error_response: &Value) -> BedrockError {
        if let Some(error) = error_response.get("error") {
            let error_code = error
                .get("code")
                .and_then(|c| c.as_str())
                .unwrap_or("UNKNOWN_ERROR");
            let error_message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            self.map_exception(error_code, error_message)
        } else if let Some(message) = error_response
            .get("message")
            .or_else(|| error_response.get("Message"))
            .and_then(|m| m.as_str())
        {
            let error_code = error_response
                .get("__type")
                .and_then(|t| t.as_str())
                .map(|t| t.rsplit('#').next().unwrap_or(t))
                .unwrap_or("UNKNOWN_ERROR");
            self.map_exception(error_code, message)
        } else {
            ProviderError::response_parsing("bedrock", "Unknown error response format".to_string())
        }
    }

    fn map_network_error(&self, error: &dyn std::error::Error) -> BedrockError {
        ProviderError::network("bedrock", format!("Network error: {}", error))
    }

    fn map_parsing_error(&self, error: &dyn std::error::Error) -> BedrockError {
        ProviderError::response_parsing("bedrock", format!("Parsing error: {}", error))
    }
}
