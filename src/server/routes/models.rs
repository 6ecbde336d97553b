//! Model listing and retrieval endpoints

use crate::core::models::{self, ModelDescriptor};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// Body of `GET /api/models`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelListResponse {
    pub data: &'static [ModelDescriptor],
    pub default_model: String,
}

/// List selectable models in picker order
pub async fn list_models(state: web::Data<AppState>) -> HttpResponse {
    debug!("Listing available models");

    HttpResponse::Ok().json(ModelListResponse {
        data: models::list_models(),
        default_model: state.config.chat().default_model.clone(),
    })
}

/// Get a single model descriptor
pub async fn get_model(model_id: web::Path<String>) -> Result<HttpResponse, GatewayError> {
    debug!("Getting model info for: {}", model_id);

    models::describe(&model_id)
        .map(|descriptor| HttpResponse::Ok().json(descriptor))
        .ok_or_else(|| GatewayError::NotFound(format!("Model {}", model_id)))
}
