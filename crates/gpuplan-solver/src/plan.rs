use gpuplan_core::models::bundle::Bundle;
use gpuplan_core::models::plan::{CostPlan, PlanRequest};
use gpuplan_core::models::profile::ModelProfile;
use gpuplan_core::pricing::Pricing;

use crate::bundle::optimal_bundle;
use crate::demand::{estimate_demand, parse_users};
use crate::economics::unit_economics;
use crate::error::SolverError;
use crate::license::license_cost;

/// Most user counts a single [`sweep`] will plan.
pub const MAX_SWEEP_POINTS: u64 = 10_000;

/// Price a request end to end: demand, servers, licenses, unit economics.
pub fn plan(pricing: &Pricing, request: &PlanRequest) -> Result<CostPlan, SolverError> {
    let users = parse_users(request.concurrent_users)?;
    let model = pricing.model(&request.model_id)?;
    plan_for_model(pricing, model, users)
}

/// Same as [`plan`] with an already resolved model and validated user count.
pub fn plan_for_model(
    pricing: &Pricing,
    model: &ModelProfile,
    concurrent_users: u64,
) -> Result<CostPlan, SolverError> {
    let demand = estimate_demand(
        concurrent_users,
        &pricing.workload,
        model.output_tokens_per_second,
    )?;

    let bundle = optimal_bundle(demand.gpus_needed, &model.servers);
    let server_description = bundle.describe();
    let (server_cost, sku_breakdown) = match bundle {
        Bundle::Feasible { cost, breakdown } => (cost, breakdown),
        Bundle::Infeasible { required_gpus } => {
            tracing::warn!(
                model = %model.id,
                required_gpus,
                "server catalog cannot cover requirement"
            );
            return Err(SolverError::Infeasible { required_gpus });
        }
    };

    let license = license_cost(demand.gpus_needed, &pricing.license_tiers);
    let total_cost = server_cost + license.cost;
    let economics = unit_economics(
        total_cost,
        concurrent_users,
        demand.gpus_needed,
        model.output_tokens_per_second,
    );

    tracing::info!(
        model = %model.id,
        concurrent_users,
        gpus = demand.gpus_needed,
        total_cost,
        "cost plan computed"
    );

    Ok(CostPlan {
        model_id: model.id.clone(),
        model_name: model.display_name.clone(),
        gpu_type: model.gpu_type.clone(),
        currency: pricing.currency.clone(),
        concurrent_users,
        demand,
        gpus_needed: demand.gpus_needed,
        server_cost,
        sku_breakdown,
        server_description,
        license_tier: license.tier,
        license_price_per_gpu: license.price_per_gpu,
        license_cost: license.cost,
        total_cost,
        cost_per_user: economics.cost_per_user,
        cost_per_million_tokens: economics.cost_per_million_tokens,
    })
}

/// Plan a range of user counts for one model, e.g. to tabulate where the
/// server configuration changes.
pub fn sweep(
    pricing: &Pricing,
    model_id: &str,
    from: u64,
    to: u64,
    step: u64,
) -> Result<Vec<CostPlan>, SolverError> {
    if step == 0 {
        return Err(SolverError::InvalidArgument("sweep step must be positive".into()));
    }
    if from > to {
        return Err(SolverError::InvalidArgument(format!(
            "sweep range is empty: {from} > {to}"
        )));
    }
    let step_by = usize::try_from(step).map_err(|_| {
        SolverError::InvalidArgument(format!("sweep step {step} is too large"))
    })?;
    let points = ((to - from) / step).saturating_add(1);
    if points > MAX_SWEEP_POINTS {
        return Err(SolverError::InvalidArgument(format!(
            "sweep of {points} points exceeds the limit of {MAX_SWEEP_POINTS}"
        )));
    }
    let model = pricing.model(model_id)?;
    (from..=to)
        .step_by(step_by)
        .map(|users| plan_for_model(pricing, model, users))
        .collect()
}
