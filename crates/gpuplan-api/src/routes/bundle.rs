use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use gpuplan_core::models::bundle::Bundle;
use gpuplan_solver::bundle::{optimal_bundle, parse_requirement};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BundleRequest {
    pub model_id: String,
    pub required_gpus: i64,
}

#[derive(Serialize)]
pub struct BundleResponse {
    pub model_id: String,
    pub required_gpus: u32,
    pub description: String,
    pub bundle: Bundle,
}

/// Cheapest server combination for an explicit GPU count.
///
/// An infeasible catalog is a 200 response with `bundle.status = "infeasible"`.
pub async fn solve_bundle(
    State(state): State<AppState>,
    Json(req): Json<BundleRequest>,
) -> Result<Json<BundleResponse>, ApiError> {
    let required_gpus = parse_requirement(req.required_gpus)?;
    let model = state.pricing.model(&req.model_id)?;
    let bundle = optimal_bundle(required_gpus, &model.servers);

    Ok(Json(BundleResponse {
        model_id: req.model_id,
        required_gpus,
        description: bundle.describe(),
        bundle,
    }))
}
