//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway.

#![allow(missing_docs)]

use crate::core::providers::unified_provider::ProviderError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Top-level message for failed upstream calls
pub const UPSTREAM_FAILURE: &str = "Failed to get response from Bedrock";

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Validation errors; the message is shown to the caller as is
    #[error("{0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Status code and JSON body for this error
    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            GatewayError::Validation(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message.clone()))
            }
            GatewayError::NotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new(self.to_string()))
            }
            GatewayError::Provider(provider_error) => match provider_error {
                ProviderError::UnsupportedModel { model, .. } => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(format!("Unsupported model: {}", model)),
                ),
                ProviderError::NotSupported { feature, .. } => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(format!("Not supported: {}", feature)),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details(UPSTREAM_FAILURE, provider_error.to_string()),
                ),
            },
            GatewayError::HttpClient(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_details(UPSTREAM_FAILURE, self.to_string()),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("An internal error occurred".to_string()),
            ),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status_and_body().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, body) = self.status_and_body();
        HttpResponse::build(status_code).json(body)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
