use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::license::LicenseTier;

/// A request to price a model for a number of concurrent users.
///
/// `concurrent_users` is signed so that negative input from the outside
/// world can be rejected explicitly instead of failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanRequest {
    pub model_id: String,
    pub concurrent_users: i64,
}

/// Intermediate figures of the demand estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemandEstimate {
    pub requests_per_second_per_gpu: f64,
    pub total_requests_per_second: f64,
    pub gpus_needed: u32,
}

/// Full monthly cost breakdown for one model and user count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostPlan {
    pub model_id: String,
    pub model_name: String,
    pub gpu_type: String,
    pub currency: String,
    pub concurrent_users: u64,
    pub demand: DemandEstimate,
    pub gpus_needed: u32,
    pub server_cost: f64,
    /// Server size → count, only sizes actually used.
    pub sku_breakdown: BTreeMap<u32, u32>,
    pub server_description: String,
    pub license_tier: Option<LicenseTier>,
    pub license_price_per_gpu: f64,
    pub license_cost: f64,
    pub total_cost: f64,
    pub cost_per_user: f64,
    pub cost_per_million_tokens: f64,
}
