//! Error handling for the gateway

pub mod error;

pub use error::*;
