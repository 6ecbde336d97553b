//! Chat endpoints
//!
//! `POST /api/chat` answers either a single `{ message }` or a whole
//! `{ messages, modelId }` conversation. `POST /api/chat/stream` relays
//! reply fragments as Server-Sent Events.

use crate::core::gateway::StreamEvent;
use crate::core::providers::bedrock::normalize_turns;
use crate::core::streaming::Event;
use crate::core::types::Message;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{HttpResponse, web};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Inbound chat body
///
/// Carries either `message` (single-turn variant) or `messages` with an
/// optional `modelId`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    #[serde(default)]
    pub model_id: Option<String>,
}

/// Reply to a single-message request
#[derive(Debug, Serialize, Deserialize)]
pub struct SingleReply {
    pub text: String,
}

/// Reply to a conversation request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationReply {
    pub response: String,
    pub model_id: String,
}

impl ChatRequest {
    /// Non-empty history and the model to run it on
    fn conversation(self, state: &AppState) -> Result<(Vec<Message>, String), GatewayError> {
        let messages = self.messages.unwrap_or_default();
        if messages.is_empty() {
            return Err(GatewayError::Validation("No messages provided".to_string()));
        }

        let model_id = self
            .model_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| state.config.chat().default_model.clone());

        let messages = if state.config.chat().merge_consecutive_roles {
            normalize_turns(&messages)
        } else {
            messages
        };

        Ok((messages, model_id))
    }
}

/// Unary chat endpoint
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, GatewayError> {
    let request = request.into_inner();

    if request.messages.is_none() {
        let message = request
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| {
                warn!("Rejected chat request without a message");
                GatewayError::Validation("Message is required".to_string())
            })?;

        info!("Single message chat request via {}", state.gateway.name());
        let text = state.gateway.invoke_single(&message).await.map_err(|e| {
            error!("Single message chat failed: {}", e);
            GatewayError::from(e)
        })?;

        return Ok(HttpResponse::Ok().json(SingleReply { text }));
    }

    let (messages, model_id) = request.conversation(&state).map_err(|e| {
        warn!("Rejected chat request: {}", e);
        e
    })?;

    info!(
        "Chat request for model {} with {} messages",
        model_id,
        messages.len()
    );

    let response = state
        .gateway
        .invoke(&messages, &model_id)
        .await
        .map_err(|e| {
            error!("Chat request for {} failed: {}", model_id, e);
            GatewayError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(ConversationReply { response, model_id }))
}

/// Streaming chat endpoint
///
/// Errors raised before the upstream accepts the request come back as a
/// regular JSON error response. Once streaming has started, a failure is sent
/// as an `error` event and the stream ends without `[DONE]`.
pub async fn chat_stream(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, GatewayError> {
    let (messages, model_id) = request.into_inner().conversation(&state).map_err(|e| {
        warn!("Rejected streaming chat request: {}", e);
        e
    })?;

    info!(
        "Streaming chat request for model {} with {} messages",
        model_id,
        messages.len()
    );

    let mut fragments = state
        .gateway
        .invoke_streaming(&messages, &model_id)
        .await
        .map_err(|e| {
            error!("Failed to open stream for {}: {}", model_id, e);
            GatewayError::from(e)
        })?;

    let sse_stream = async_stream::stream! {
        let mut finished = false;
        while let Some(event) = fragments.next().await {
            match event {
                Ok(StreamEvent::Fragment(text)) => {
                    yield Ok::<_, GatewayError>(Event::fragment(&text).to_bytes());
                }
                Ok(StreamEvent::Done) => {
                    debug!("Stream for {} completed", model_id);
                    yield Ok::<_, GatewayError>(Event::done().to_bytes());
                    finished = true;
                    break;
                }
                Err(e) => {
                    error!("Stream error for {}: {}", model_id, e);
                    yield Ok::<_, GatewayError>(Event::error(&e.to_string()).to_bytes());
                    finished = true;
                    break;
                }
            }
        }
        if !finished {
            error!("Stream for {} ended before the end marker", model_id);
            yield Ok::<_, GatewayError>(
                Event::error("stream ended before the end marker").to_bytes(),
            );
        }
    };

    Ok(HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/event-stream"))
        .insert_header((CACHE_CONTROL, "no-cache"))
        .insert_header(("Connection", "keep-alive"))
        .streaming(sse_stream))
}
