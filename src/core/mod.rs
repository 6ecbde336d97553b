//! Core functionality for the chat service
//!
//! Model registry, upstream adapters, inference gateways and the
//! conversation session.

pub mod gateway;
pub mod models;
pub mod providers;
pub mod session;
pub mod streaming;
pub mod traits;
pub mod types;
