//! Utility modules for the gateway
//!
//! - **error**: Error types and their HTTP rendering
//! - **logging**: `tracing` subscriber setup

pub mod error;
pub mod logging;

pub use error::{GatewayError, Result};
pub use logging::init_logging;
