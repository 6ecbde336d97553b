//! Shared traits for upstream integrations

pub mod error_mapper;

pub use error_mapper::ErrorMapper;
