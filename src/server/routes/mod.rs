//! HTTP route modules
//!
//! Chat and model-listing endpoints under `/api`.

pub mod chat;
pub mod models;

use actix_web::web;

/// Configure all `/api` routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/chat", web::post().to(chat::chat))
            .route("/chat/stream", web::post().to(chat::chat_stream))
            .route("/models", web::get().to(models::list_models))
            .route("/models/{model_id}", web::get().to(models::get_model)),
    );
}
