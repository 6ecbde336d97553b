//! Selectable model metadata

pub mod registry;

pub use registry::{
    DEFAULT_MODEL_ID, ModelDescriptor, SINGLE_MESSAGE_MAX_TOKENS, SINGLE_MESSAGE_MODEL_ID,
    describe, list_models,
};
