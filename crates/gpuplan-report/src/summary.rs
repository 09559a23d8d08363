use gpuplan_core::models::license::LicenseTiers;
use gpuplan_core::models::plan::CostPlan;
use gpuplan_core::models::profile::{ModelProfile, Workload};
use gpuplan_core::pricing::Pricing;
use serde::Serialize;

use crate::error::ReportError;
use crate::render::render_template;
use crate::templates;

#[derive(Serialize)]
struct AssumptionsContext<'a> {
    workload: &'a Workload,
    license_tiers: &'a LicenseTiers,
    currency: &'a str,
    model: &'a ModelProfile,
    server_sizes: Vec<u32>,
}

#[derive(Serialize)]
struct SweepContext<'a> {
    model_name: &'a str,
    gpu_type: &'a str,
    currency: &'a str,
    plans: &'a [CostPlan],
}

/// Plain-text summary of one cost plan.
pub fn render_summary(plan: &CostPlan) -> Result<String, ReportError> {
    render_template("summary", templates::SUMMARY, plan)
}

/// The assumptions behind every figure for `model`.
pub fn render_assumptions(pricing: &Pricing, model: &ModelProfile) -> Result<String, ReportError> {
    let context = AssumptionsContext {
        workload: &pricing.workload,
        license_tiers: &pricing.license_tiers,
        currency: &pricing.currency,
        model,
        server_sizes: model.servers.sizes().collect(),
    };
    render_template("assumptions", templates::ASSUMPTIONS, &context)
}

/// One line per plan. All plans are expected to share a model.
pub fn render_sweep(plans: &[CostPlan]) -> Result<String, ReportError> {
    let Some(first) = plans.first() else {
        return Ok(String::new());
    };
    let context = SweepContext {
        model_name: &first.model_name,
        gpu_type: &first.gpu_type,
        currency: &first.currency,
        plans,
    };
    render_template("sweep", templates::SWEEP, &context)
}
