use axum::Json;
use axum::extract::State;

use gpuplan_core::models::plan::{CostPlan, PlanRequest};
use gpuplan_report::summary::render_summary;
use gpuplan_solver::plan::plan;

use crate::error::ApiError;
use crate::state::AppState;

/// Price a model for a number of concurrent users.
pub async fn create_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<CostPlan>, ApiError> {
    let plan = plan(&state.pricing, &req)?;
    Ok(Json(plan))
}

/// Same as [`create_plan`], rendered as plain text.
pub async fn plan_summary(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<String, ApiError> {
    let plan = plan(&state.pricing, &req)?;
    Ok(render_summary(&plan)?)
}
