//! Server-Sent Events framing for streamed chat replies

use actix_web::web;
use serde::Serialize;

/// Data payload that terminates a successful stream
pub const DONE_MARKER: &str = "[DONE]";

/// Server-Sent Event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    /// Event type
    pub event: Option<String>,
    /// Event data
    pub data: String,
}

impl Event {
    /// Create a new empty event
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event type
    pub fn event(mut self, event: &str) -> Self {
        self.event = Some(event.to_string());
        self
    }

    /// Set the event data
    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    /// Set the event data to `value` serialized as JSON
    pub fn json_data<T: Serialize>(self, value: &T) -> Result<Self, serde_json::Error> {
        let data = serde_json::to_string(value)?;
        Ok(self.data(&data))
    }

    /// `data: {"text": ...}` for one reply fragment
    pub fn fragment(text: &str) -> Self {
        Self::new().data(&serde_json::json!({ "text": text }).to_string())
    }

    /// `event: error` carrying `{"error": ...}`
    pub fn error(message: &str) -> Self {
        Self::new()
            .event("error")
            .data(&serde_json::json!({ "error": message }).to_string())
    }

    /// Terminal `data: [DONE]` event
    pub fn done() -> Self {
        Self::new().data(DONE_MARKER)
    }

    /// Convert event to bytes for SSE transmission
    pub fn to_bytes(&self) -> web::Bytes {
        let mut result = String::new();
        if let Some(event) = &self.event {
            result.push_str(&format!("event: {}\n", event));
        }
        result.push_str(&format!("data: {}\n\n", self.data));
        web::Bytes::from(result)
    }
}
