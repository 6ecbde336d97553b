//! Core data types shared by the adapters, the gateway and the session

pub mod message;

pub use message::{Message, MessageRole};
