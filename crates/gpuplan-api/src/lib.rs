//! gpuplan-api
//!
//! JSON endpoints over the cost planner for the calculator front-end.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/models", get(routes::models::list_models))
        .route("/models/{id}", get(routes::models::get_model))
        .route(
            "/models/{id}/assumptions",
            get(routes::models::get_assumptions),
        )
        .route("/plan", post(routes::plan::create_plan))
        .route("/plan/summary", post(routes::plan::plan_summary))
        .route("/bundle", post(routes::bundle::solve_bundle))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
