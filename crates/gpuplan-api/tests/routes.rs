use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use gpuplan_api::app;
use gpuplan_api::state::AppState;
use gpuplan_core::models::catalog::SkuCatalog;
use gpuplan_core::pricing::Pricing;

fn router() -> Router {
    app(AppState::new(Pricing::builtin()))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(router: Router, uri: &str, payload: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(router, request).await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json(router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_builtin_models() {
    let (status, body) = get_json(router(), "/models").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["t-lite", "t-pro"]);
}

#[tokio::test]
async fn model_detail_and_missing_model() {
    let (status, body) = get_json(router(), "/models/t-pro").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gpu_type"], "A100 80GB");
    assert_eq!(body["servers"]["8"], 2_500_000.0);

    let (status, body) = get_json(router(), "/models/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("unknown"));
}

#[tokio::test]
async fn assumptions_are_plain_text() {
    let request = Request::get("/models/t-lite/assumptions")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router(), request).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("Assumptions and calculation details"));
}

#[tokio::test]
async fn plan_returns_full_cost_breakdown() {
    let payload = json!({ "model_id": "t-lite", "concurrent_users": 500 });
    let (status, body) = post_json(router(), "/plan", payload).await;
    assert_eq!(status, StatusCode::OK);

    let plan: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(plan["gpus_needed"], 5);
    assert_eq!(plan["server_cost"], 380_000.0);
    assert_eq!(plan["sku_breakdown"], json!({ "1": 1, "4": 1 }));
    assert_eq!(plan["license_tier"], "five_plus");
    assert_eq!(plan["total_cost"], 1_030_000.0);
}

#[tokio::test]
async fn plan_summary_is_text() {
    let payload = json!({ "model_id": "t-lite", "concurrent_users": 50 });
    let (status, body) = post_json(router(), "/plan/summary", payload).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("250,000 RUB/month"));
}

#[tokio::test]
async fn negative_users_are_a_bad_request() {
    let payload = json!({ "model_id": "t-lite", "concurrent_users": -5 });
    let (status, body) = post_json(router(), "/plan", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("invalid argument"));
}

#[tokio::test]
async fn infeasible_plan_is_unprocessable() {
    let mut pricing = Pricing::builtin();
    pricing.models[0].servers = SkuCatalog::new([(2, 100.0)]).unwrap();
    let router = app(AppState::new(pricing));

    let payload = json!({ "model_id": "t-lite", "concurrent_users": 10 });
    let (status, _) = post_json(router, "/plan", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn bundle_solves_explicit_gpu_count() {
    let payload = json!({ "model_id": "t-lite", "required_gpus": 8 });
    let (status, body) = post_json(router(), "/bundle", payload).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["bundle"]["status"], "feasible");
    assert_eq!(body["bundle"]["cost"], 500_000.0);
    assert_eq!(body["description"], "1 × 8-GPU server");
}

#[tokio::test]
async fn bundle_rejects_negative_gpu_count() {
    let payload = json!({ "model_id": "t-lite", "required_gpus": -1 });
    let (status, _) = post_json(router(), "/bundle", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bundle_reports_infeasible_outcome() {
    let mut pricing = Pricing::builtin();
    pricing.models[0].servers = SkuCatalog::new([(2, 100.0)]).unwrap();
    let router = app(AppState::new(pricing));

    let payload = json!({ "model_id": "t-lite", "required_gpus": 3 });
    let (status, body) = post_json(router, "/bundle", payload).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["bundle"]["status"], "infeasible");
    assert!(body["bundle"].get("cost").is_none());
}

#[tokio::test]
async fn bundle_above_planning_limit_is_a_bad_request() {
    let payload = json!({ "model_id": "t-lite", "required_gpus": 4_000_000_000_i64 });
    let (status, body) = post_json(router(), "/bundle", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("planning limit"));
}

#[tokio::test]
async fn plan_above_planning_limit_is_a_bad_request() {
    let payload = json!({ "model_id": "t-lite", "concurrent_users": 440_000_000_000_i64 });
    let (status, body) = post_json(router(), "/plan", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("planning limit"));
}
