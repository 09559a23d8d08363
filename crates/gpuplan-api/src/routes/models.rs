use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use gpuplan_core::models::profile::ModelProfile;
use gpuplan_report::summary::render_assumptions;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ModelSummary {
    id: String,
    display_name: String,
    gpu_type: String,
}

pub async fn list_models(State(state): State<AppState>) -> Json<Vec<ModelSummary>> {
    let models = state
        .pricing
        .models
        .iter()
        .map(|m| ModelSummary {
            id: m.id.clone(),
            display_name: m.display_name.clone(),
            gpu_type: m.gpu_type.clone(),
        })
        .collect();
    Json(models)
}

pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModelProfile>, ApiError> {
    let model = state.pricing.model(&id)?;
    Ok(Json(model.clone()))
}

/// Plain-text assumptions behind every figure for one model.
pub async fn get_assumptions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let model = state.pricing.model(&id)?;
    Ok(render_assumptions(&state.pricing, model)?)
}
