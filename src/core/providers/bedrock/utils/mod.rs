//! Utility modules for Bedrock provider
//!
//! AWS credential resolution and region validation.

pub mod auth;
pub mod region;

pub use auth::{AwsAuth, AwsCredentials};
pub use region::{AWS_REGIONS, validate_region};
