//! Model catalog API handlers

use crate::catalog::{self, ModelDescriptor, MODELS};
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Models list response
#[derive(Debug, Serialize)]
pub struct ModelsListResponse {
    /// Catalog keyed by model id
    pub models: BTreeMap<&'static str, &'static ModelDescriptor>,
    /// Model used when a chat request names none
    pub default_model: String,
    /// Status indicator
    pub status: &'static str,
}

/// Single model response
#[derive(Debug, Serialize)]
pub struct ModelResponse {
    /// Catalog id
    pub model_id: &'static str,
    /// Model description
    pub model: &'static ModelDescriptor,
    /// Status indicator
    pub status: &'static str,
}

/// GET /api/models - List available models
pub async fn list_models(State(state): State<SharedState>) -> Json<ModelsListResponse> {
    Json(ModelsListResponse {
        models: MODELS.iter().map(|model| (model.id, model)).collect(),
        default_model: state.default_model.clone(),
        status: "success",
    })
}

/// GET /api/models/:model_id - Describe one model
pub async fn get_model(Path(model_id): Path<String>) -> Result<Json<ModelResponse>, AppError> {
    let model = catalog::find(&model_id).ok_or(AppError::ModelNotFound(model_id))?;
    Ok(Json(ModelResponse {
        model_id: model.id,
        model,
        status: "success",
    }))
}
