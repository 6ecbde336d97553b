//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: validators for sections defined outside `config::models`
//!   and for the cross-section rules of `GatewayConfig`

mod config_validators;
mod trait_def;

pub use trait_def::Validate;
