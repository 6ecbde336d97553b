//! AWS event-stream frame encoder
//!
//! Builds `application/vnd.amazon.eventstream` bodies for mocked
//! `invoke-with-response-stream` responses. Only string headers are emitted
//! and both CRC fields are written as zero.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

const STRING_HEADER: u8 = 7;

/// Encode one frame
pub fn frame(headers: &[(&str, &str)], payload: &[u8]) -> Vec<u8> {
    let mut header_bytes = Vec::new();
    for (name, value) in headers {
        header_bytes.push(name.len() as u8);
        header_bytes.extend_from_slice(name.as_bytes());
        header_bytes.push(STRING_HEADER);
        header_bytes.extend_from_slice(&(value.len() as u16).to_be_bytes());
        header_bytes.extend_from_slice(value.as_bytes());
    }

    let total = 12 + header_bytes.len() + payload.len() + 4;
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&(total as u32).to_be_bytes());
    out.extend_from_slice(&(header_bytes.len() as u32).to_be_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&header_bytes);
    out.extend_from_slice(payload);
    out.extend_from_slice(&[0; 4]);
    out
}

/// `chunk` event wrapping a model JSON document
pub fn chunk(model_json: Value) -> Vec<u8> {
    let payload = json!({ "bytes": STANDARD.encode(model_json.to_string()) });
    frame(
        &[
            (":message-type", "event"),
            (":event-type", "chunk"),
            (":content-type", "application/json"),
        ],
        payload.to_string().as_bytes(),
    )
}

/// Claude text delta
pub fn claude_delta(text: &str) -> Vec<u8> {
    chunk(json!({
        "type": "content_block_delta",
        "index": 0,
        "delta": { "type": "text_delta", "text": text }
    }))
}

/// Claude end-of-message marker
pub fn claude_stop() -> Vec<u8> {
    chunk(json!({ "type": "message_stop" }))
}

/// Titan chunk; `finished` sets `completionReason`
pub fn titan_chunk(text: &str, finished: bool) -> Vec<u8> {
    let reason = if finished { json!("FINISH") } else { Value::Null };
    chunk(json!({
        "outputText": text,
        "index": 0,
        "completionReason": reason
    }))
}

/// Exception frame as sent mid-stream
pub fn exception(kind: &str, message: &str) -> Vec<u8> {
    frame(
        &[
            (":message-type", "exception"),
            (":exception-type", kind),
            (":content-type", "application/json"),
        ],
        json!({ "message": message }).to_string().as_bytes(),
    )
}

/// Concatenate frames into one response body
pub fn body(frames: Vec<Vec<u8>>) -> Vec<u8> {
    frames.concat()
}
