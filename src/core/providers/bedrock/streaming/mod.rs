//! Streaming Module for Bedrock
//!
//! Decodes the AWS event-stream framing returned by
//! `invoke-with-response-stream` into answer fragments.
//!
//! Each frame is laid out as
//!
//! ```text
//! | total len (4) | headers len (4) | prelude crc (4) | headers | payload | crc (4) |
//! ```
//!
//! `chunk` events carry `{"bytes": "<base64 model json>"}`. Frame CRCs are not
//! checked; TLS already guards the body.

use crate::core::gateway::StreamEvent;
use crate::core::providers::bedrock::error::BedrockErrorMapper;
use crate::core::providers::bedrock::model_config::ModelFamily;
use crate::core::providers::unified_provider::ProviderError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde_json::Value;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, error};

const PRELUDE_LEN: usize = 12;
const MIN_FRAME_LEN: usize = 16;

/// AWS Event Stream message
#[derive(Debug)]
pub struct EventStreamMessage {
    pub headers: Vec<EventStreamHeader>,
    pub payload: Bytes,
}

impl EventStreamMessage {
    /// Look up a string header by name
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.iter().find_map(|h| match &h.value {
            HeaderValue::String(s) if h.name == name => Some(s.as_str()),
            _ => None,
        })
    }
}

/// Event stream header
#[derive(Debug)]
pub struct EventStreamHeader {
    pub name: String,
    pub value: HeaderValue,
}

/// Header value types
#[derive(Debug, PartialEq)]
pub enum HeaderValue {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    ByteArray(Vec<u8>),
    String(String),
    Timestamp(i64),
    Uuid([u8; 16]),
}

/// Bedrock streaming response
pub struct BedrockStream {
    inner: Pin<Box<dyn Stream<Item = Result<Bytes, ProviderError>> + Send>>,
    buffer: Vec<u8>,
    family: ModelFamily,
    pending: VecDeque<StreamEvent>,
    fragments: u64,
    finished: bool,
    error_mapper: BedrockErrorMapper,
}

impl BedrockStream {
    /// Create a new Bedrock stream over a raw response body
    pub fn new<S, E>(stream: S, family: ModelFamily) -> Self
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: std::fmt::Display,
    {
        let mapped_stream = stream
            .map(|result| result.map_err(|e| ProviderError::network("bedrock", e.to_string())));

        Self {
            inner: Box::pin(mapped_stream),
            buffer: Vec::new(),
            family,
            pending: VecDeque::new(),
            fragments: 0,
            finished: false,
            error_mapper: BedrockErrorMapper,
        }
    }

    /// Parse event stream message from one complete frame
    pub fn parse_event_message(data: &[u8]) -> Result<EventStreamMessage, ProviderError> {
        if data.len() < MIN_FRAME_LEN {
            return Err(ProviderError::response_parsing(
                "bedrock",
                "Invalid event stream message",
            ));
        }

        let total_length = read_u32(data, 0) as usize;
        let headers_length = read_u32(data, 4) as usize;

        if data.len() < total_length || total_length < MIN_FRAME_LEN {
            return Err(ProviderError::response_parsing(
                "bedrock",
                "Incomplete event stream message",
            ));
        }

        let headers_end = PRELUDE_LEN + headers_length;
        let payload_end = total_length - 4;
        if headers_end > payload_end {
            return Err(ProviderError::response_parsing(
                "bedrock",
                "Event stream headers overrun the frame",
            ));
        }

        let headers = parse_headers(&data[PRELUDE_LEN..headers_end])?;
        let payload = Bytes::copy_from_slice(&data[headers_end..payload_end]);

        Ok(EventStreamMessage { headers, payload })
    }

    /// Split the next complete frame off the buffer, if one has arrived
    fn next_frame(&mut self) -> Result<Option<EventStreamMessage>, ProviderError> {
        if self.buffer.len() < PRELUDE_LEN {
            return Ok(None);
        }
        let total_length = read_u32(&self.buffer, 0) as usize;
        if total_length < MIN_FRAME_LEN {
            return Err(ProviderError::response_parsing(
                "bedrock",
                format!("Invalid event stream frame length {}", total_length),
            ));
        }
        if self.buffer.len() < total_length {
            return Ok(None);
        }
        let frame: Vec<u8> = self.buffer.drain(..total_length).collect();
        Self::parse_event_message(&frame).map(Some)
    }

    /// Turn one decoded frame into queued events
    fn handle_message(&mut self, message: EventStreamMessage) -> Result<(), ProviderError> {
        match message.header_str(":message-type") {
            Some("exception") => {
                let code = message.header_str(":exception-type").unwrap_or("Exception");
                let text = exception_message(&message.payload);
                error!("Bedrock stream exception: {} - {}", code, text);
                Err(self.with_position(self.error_mapper.map_exception(code, &text)))
            }
            Some("error") => {
                let code = message.header_str(":error-code").unwrap_or("Error");
                let text = message.header_str(":error-message").unwrap_or("unknown error");
                error!("Bedrock stream error: {} - {}", code, text);
                Err(self.with_position(self.error_mapper.map_exception(code, text)))
            }
            _ => match message.header_str(":event-type") {
                Some("chunk") => {
                    let chunk = decode_chunk(&message.payload)?;
                    self.parse_chunk(&chunk)
                }
                other => {
                    debug!("Ignoring Bedrock stream event {:?}", other);
                    Ok(())
                }
            },
        }
    }

    /// Parse chunk based on model family
    fn parse_chunk(&mut self, value: &Value) -> Result<(), ProviderError> {
        match self.family {
            ModelFamily::Chat => self.parse_claude_chunk(value),
            ModelFamily::PromptTitan => self.parse_titan_chunk(value),
            ModelFamily::PromptJurassic | ModelFamily::Unsupported => {
                return Err(ProviderError::not_supported(
                    "bedrock",
                    format!("streaming for {}", self.family),
                ));
            }
        }
        Ok(())
    }

    /// Parse Claude streaming chunk
    fn parse_claude_chunk(&mut self, value: &Value) {
        match value.get("type").and_then(|v| v.as_str()) {
            Some("content_block_delta") => {
                if let Some(text) = value
                    .get("delta")
                    .and_then(|d| d.get("text"))
                    .and_then(|t| t.as_str())
                {
                    self.push_fragment(text);
                }
            }
            Some("message_stop") => self.pending.push_back(StreamEvent::Done),
            Some(_) => {}
            None => {
                // Legacy text-completions chunk
                if let Some(text) = value.get("completion").and_then(|t| t.as_str()) {
                    self.push_fragment(text);
                }
                if value.get("stop_reason").is_some_and(|r| !r.is_null()) {
                    self.pending.push_back(StreamEvent::Done);
                }
            }
        }
    }

    /// Parse Titan streaming chunk
    fn parse_titan_chunk(&mut self, value: &Value) {
        if let Some(text) = value.get("outputText").and_then(|t| t.as_str()) {
            self.push_fragment(text);
        }
        if value.get("completionReason").is_some_and(|r| !r.is_null()) {
            self.pending.push_back(StreamEvent::Done);
        }
    }

    fn push_fragment(&mut self, text: &str) {
        if !text.is_empty() {
            self.pending
                .push_back(StreamEvent::Fragment(text.to_string()));
        }
    }

    fn with_position(&self, err: ProviderError) -> ProviderError {
        match err {
            ProviderError::Streaming { message, .. } => {
                ProviderError::streaming("bedrock", Some(self.fragments), message)
            }
            other => other,
        }
    }

    fn fail(&mut self, err: ProviderError) -> Poll<Option<Result<StreamEvent, ProviderError>>> {
        self.finished = true;
        self.pending.clear();
        Poll::Ready(Some(Err(err)))
    }
}

impl Stream for BedrockStream {
    type Item = Result<StreamEvent, ProviderError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(event) = this.pending.pop_front() {
                match event {
                    StreamEvent::Done => {
                        this.finished = true;
                        this.pending.clear();
                    }
                    StreamEvent::Fragment(_) => this.fragments += 1,
                }
                return Poll::Ready(Some(Ok(event)));
            }

            if this.finished {
                return Poll::Ready(None);
            }

            match this.next_frame() {
                Ok(Some(message)) => {
                    if let Err(e) = this.handle_message(message) {
                        return this.fail(e);
                    }
                    continue;
                }
                Ok(None) => {}
                Err(e) => return this.fail(e),
            }

            match futures::ready!(this.inner.as_mut().poll_next(cx)) {
                Some(Ok(bytes)) => this.buffer.extend_from_slice(&bytes),
                Some(Err(e)) => return this.fail(e),
                None => {
                    let err = ProviderError::streaming(
                        "bedrock",
                        Some(this.fragments),
                        "response stream ended before the end marker",
                    );
                    return this.fail(err);
                }
            }
        }
    }
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn truncated() -> ProviderError {
    ProviderError::response_parsing("bedrock", "Truncated event stream header")
}

fn take<'a>(data: &'a [u8], offset: &mut usize, len: usize) -> Result<&'a [u8], ProviderError> {
    let end = offset.checked_add(len).ok_or_else(truncated)?;
    let slice = data.get(*offset..end).ok_or_else(truncated)?;
    *offset = end;
    Ok(slice)
}

fn parse_headers(data: &[u8]) -> Result<Vec<EventStreamHeader>, ProviderError> {
    let mut headers = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let name_length = take(data, &mut offset, 1)?[0] as usize;
        let name = String::from_utf8_lossy(take(data, &mut offset, name_length)?).to_string();
        let header_type = take(data, &mut offset, 1)?[0];

        let value = match header_type {
            0 => HeaderValue::Boolean(true),
            1 => HeaderValue::Boolean(false),
            2 => HeaderValue::Byte(take(data, &mut offset, 1)?[0] as i8),
            3 => {
                let b = take(data, &mut offset, 2)?;
                HeaderValue::Short(i16::from_be_bytes([b[0], b[1]]))
            }
            4 => {
                let b = take(data, &mut offset, 4)?;
                HeaderValue::Integer(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
            }
            5 | 8 => {
                let b = take(data, &mut offset, 8)?;
                let mut raw = [0u8; 8];
                raw.copy_from_slice(b);
                let v = i64::from_be_bytes(raw);
                if header_type == 5 {
                    HeaderValue::Long(v)
                } else {
                    HeaderValue::Timestamp(v)
                }
            }
            6 | 7 => {
                let b = take(data, &mut offset, 2)?;
                let len = u16::from_be_bytes([b[0], b[1]]) as usize;
                let raw = take(data, &mut offset, len)?;
                if header_type == 6 {
                    HeaderValue::ByteArray(raw.to_vec())
                } else {
                    HeaderValue::String(String::from_utf8_lossy(raw).to_string())
                }
            }
            9 => {
                let mut raw = [0u8; 16];
                raw.copy_from_slice(take(data, &mut offset, 16)?);
                HeaderValue::Uuid(raw)
            }
            other => {
                return Err(ProviderError::response_parsing(
                    "bedrock",
                    format!("Unknown event stream header type {}", other),
                ));
            }
        };

        headers.push(EventStreamHeader { name, value });
    }

    Ok(headers)
}

/// Unwrap `{"bytes": "<base64>"}` into the model's own JSON chunk
fn decode_chunk(payload: &[u8]) -> Result<Value, ProviderError> {
    let envelope: Value = serde_json::from_slice(payload)
        .map_err(|e| ProviderError::response_parsing("bedrock", e.to_string()))?;
    let encoded = envelope
        .get("bytes")
        .and_then(|b| b.as_str())
        .ok_or_else(|| ProviderError::response_parsing("bedrock", "chunk without bytes"))?;
    let decoded = STANDARD
        .decode(encoded)
        .map_err(|e| ProviderError::response_parsing("bedrock", e.to_string()))?;
    serde_json::from_slice(&decoded)
        .map_err(|e| ProviderError::response_parsing("bedrock", e.to_string()))
}

fn exception_message(payload: &[u8]) -> String {
    serde_json::from_slice::<Value>(payload)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("Message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| String::from_utf8_lossy(payload).to_string())
}
