//! Conversation session
//!
//! Owns one conversation: its message list, the selected model and the
//! loading flag. At most one turn is in flight; every state transition happens
//! under a single lock that is never held across the gateway call.

use futures::StreamExt;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::core::gateway::{InferenceGateway, StreamEvent};
use crate::core::models::DEFAULT_MODEL_ID;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::Message;

/// Assistant text recorded when the gateway call fails
pub const FAILED_RESPONSE_MESSAGE: &str =
    "Error: Failed to get response from Bedrock. Please check your connection and try again.";

/// Renderable view of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub messages: Vec<Message>,
    pub selected_model: String,
    pub is_loading: bool,
}

/// Why a send was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Content was empty or whitespace only
    EmptyContent,
    /// Another turn is still waiting for its reply
    InFlight,
}

/// Result of a send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing changed
    Rejected(RejectReason),
    /// The assistant message appended to the conversation
    Replied(Message),
    /// The reply arrived after the conversation was reset and was dropped
    Discarded,
}

struct Inner {
    state: ConversationState,
    /// Bumped on every reset so late replies can be recognized
    epoch: u64,
}

/// A single conversation bound to an inference gateway
pub struct ConversationSession {
    inner: Mutex<Inner>,
    gateway: Arc<dyn InferenceGateway>,
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("state", &self.inner.lock().state)
            .field("gateway", &self.gateway.name())
            .finish()
    }
}

impl ConversationSession {
    /// Start an empty conversation with `model_id` selected
    pub fn new(gateway: Arc<dyn InferenceGateway>, model_id: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: ConversationState {
                    messages: Vec::new(),
                    selected_model: model_id.into(),
                    is_loading: false,
                },
                epoch: 0,
            }),
            gateway,
        }
    }

    /// Start an empty conversation with the default model selected
    pub fn with_default_model(gateway: Arc<dyn InferenceGateway>) -> Self {
        Self::new(gateway, DEFAULT_MODEL_ID)
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> ConversationState {
        self.inner.lock().state.clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.lock().state.messages.clone()
    }

    pub fn selected_model(&self) -> String {
        self.inner.lock().state.selected_model.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().state.is_loading
    }

    /// Switch model and start a fresh conversation
    pub fn select_model(&self, model_id: impl Into<String>) {
        let mut inner = self.inner.lock();
        inner.state.selected_model = model_id.into();
        inner.state.messages.clear();
        inner.epoch += 1;
    }

    /// Drop all messages, keeping the model and loading flag
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.state.messages.clear();
        inner.epoch += 1;
    }

    /// Send a user message and wait for the full reply
    pub async fn send(&self, content: &str) -> SendOutcome {
        let (turn, history, model_id) = match self.begin(content) {
            Ok(started) => started,
            Err(reason) => return SendOutcome::Rejected(reason),
        };

        let text = match self.gateway.invoke(&history, &model_id).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error getting response from {}: {}", model_id, e);
                FAILED_RESPONSE_MESSAGE.to_string()
            }
        };

        turn.complete(text)
    }

    /// Send a user message and report the reply fragment by fragment
    ///
    /// The fragments seen by `on_fragment` concatenate to the appended
    /// assistant message unless the stream fails, in which case the failure
    /// text is appended instead.
    pub async fn send_streaming<F>(&self, content: &str, mut on_fragment: F) -> SendOutcome
    where
        F: FnMut(&str) + Send,
    {
        let (turn, history, model_id) = match self.begin(content) {
            Ok(started) => started,
            Err(reason) => return SendOutcome::Rejected(reason),
        };

        let text = match self
            .stream_reply(&history, &model_id, &mut on_fragment)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                error!("Error streaming response from {}: {}", model_id, e);
                FAILED_RESPONSE_MESSAGE.to_string()
            }
        };

        turn.complete(text)
    }

    async fn stream_reply<F>(
        &self,
        history: &[Message],
        model_id: &str,
        on_fragment: &mut F,
    ) -> Result<String, ProviderError>
    where
        F: FnMut(&str) + Send,
    {
        let mut stream = self.gateway.invoke_streaming(history, model_id).await?;
        let mut text = String::new();
        while let Some(event) = stream.next().await {
            match event? {
                StreamEvent::Fragment(fragment) => {
                    on_fragment(&fragment);
                    text.push_str(&fragment);
                }
                StreamEvent::Done => return Ok(text),
            }
        }
        Err(ProviderError::streaming(
            self.gateway.name(),
            None,
            "stream ended before the end marker",
        ))
    }

    /// Validate, append the user message and mark the session as loading
    fn begin(&self, content: &str) -> Result<(Turn<'_>, Vec<Message>, String), RejectReason> {
        if content.trim().is_empty() {
            debug!("Ignoring empty message");
            return Err(RejectReason::EmptyContent);
        }

        let mut inner = self.inner.lock();
        if inner.state.is_loading {
            warn!("Ignoring message while a reply is pending");
            return Err(RejectReason::InFlight);
        }

        inner.state.messages.push(Message::user(content));
        inner.state.is_loading = true;

        let turn = Turn {
            session: self,
            epoch: inner.epoch,
            completed: false,
        };
        Ok((
            turn,
            inner.state.messages.clone(),
            inner.state.selected_model.clone(),
        ))
    }
}

/// One in-flight turn. Dropping it unfinished still clears the loading flag.
struct Turn<'a> {
    session: &'a ConversationSession,
    epoch: u64,
    completed: bool,
}

impl Turn<'_> {
    fn complete(mut self, text: String) -> SendOutcome {
        self.completed = true;
        let mut inner = self.session.inner.lock();
        inner.state.is_loading = false;

        if inner.epoch != self.epoch {
            debug!("Discarding reply for a conversation that was reset");
            return SendOutcome::Discarded;
        }

        let reply = Message::assistant(text);
        inner.state.messages.push(reply.clone());
        SendOutcome::Replied(reply)
    }
}

impl Drop for Turn<'_> {
    fn drop(&mut self) {
        if !self.completed {
            self.session.inner.lock().state.is_loading = false;
        }
    }
}
