//! HTTP route handlers
//!
//! Top-level handlers that live outside the `/api` scope.

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Liveness probe; reports the active upstream without calling it
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "upstream": state.gateway.name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
