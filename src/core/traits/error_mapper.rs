//! Error mapper trait definition
//!
//! Converts HTTP status codes, JSON error bodies and transport failures into
//! [`ProviderError`] values. One implementation exists per upstream.

use crate::core::providers::unified_provider::ProviderError;
use serde_json::Value;

/// Trait for mapping upstream failure conditions to provider errors
pub trait ErrorMapper: Send + Sync + 'static {
    /// Map HTTP status code and response body to provider error
    ///
    /// # Common Mappings
    /// * `400` - Invalid request parameters
    /// * `401`/`403` - Authentication failure
    /// * `404` - Resource/model not found
    /// * `429` - Rate limit exceeded
    /// * `5xx` - Server-side errors
    fn map_http_error(&self, status_code: u16, response_body: &str) -> ProviderError;

    /// Map a structured JSON error body to provider error
    fn map_json_error(&self, error_response: &Value) -> ProviderError;

    /// Map a transport failure
    fn map_network_error(&self, error: &dyn std::error::Error) -> ProviderError;

    /// Map a body that could not be decoded
    fn map_parsing_error(&self, error: &dyn std::error::Error) -> ProviderError;
}
