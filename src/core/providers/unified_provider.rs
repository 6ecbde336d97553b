//! Unified Provider Error Handling
//!
//! Single error type for every upstream the gateway talks to (Bedrock runtime
//! or a remote chat gateway).
//!
//! | Variant | Purpose |
//! |------|------|
//! | Authentication | Credentials rejected |
//! | RateLimit | Throttled by upstream |
//! | ModelNotFound | Model unknown or not enabled in region |
//! | UnsupportedModel | Model id matches no adapted family |
//! | InvalidRequest | Upstream rejected the payload |
//! | NotSupported | Operation unavailable for the family |
//! | Network | Transport failure |
//! | Timeout | Upstream did not answer in time |
//! | ApiError | Any other non-success status |
//! | ResponseParsing | Malformed body or stream frame |
//! | Streaming | Stream ended abnormally |
//! | Configuration | Local misconfiguration |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bedrock_chat::ProviderError;
//!
//! let err = ProviderError::network("bedrock", "connection reset");
//! assert!(err.is_transport());
//! ```

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model '{model}' not found for {provider}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
    },

    #[error("Model '{model}' is not supported by {provider}")]
    UnsupportedModel {
        provider: &'static str,
        model: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Feature '{feature}' not supported by {provider}")]
    NotSupported {
        provider: &'static str,
        feature: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("Streaming error for {provider}: {message}")]
    Streaming {
        provider: &'static str,
        /// Number of fragments delivered before the failure
        position: Option<u64>,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Serialization error for {provider}: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    /// Create model not found error
    pub fn model_not_found(provider: &'static str, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
        }
    }

    /// Create unsupported model error
    pub fn unsupported_model(provider: &'static str, model: impl Into<String>) -> Self {
        Self::UnsupportedModel {
            provider,
            model: model.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create not supported error
    pub fn not_supported(provider: &'static str, feature: impl Into<String>) -> Self {
        Self::NotSupported {
            provider,
            feature: feature.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create API error with status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Create streaming error
    pub fn streaming(
        provider: &'static str,
        position: Option<u64>,
        message: impl Into<String>,
    ) -> Self {
        Self::Streaming {
            provider,
            position,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create serialization error
    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    /// Name of the upstream that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::UnsupportedModel { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::NotSupported { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::Streaming { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::Serialization { provider, .. } => provider,
        }
    }

    /// Whether the failure happened on the wire or upstream, as opposed to
    /// being rejected locally before any call was made
    pub fn is_transport(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedModel { .. }
                | Self::NotSupported { .. }
                | Self::Configuration { .. }
                | Self::Serialization { .. }
        )
    }
}
