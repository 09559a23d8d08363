use gpuplan_core::models::plan::DemandEstimate;
use gpuplan_core::models::profile::Workload;

use crate::bundle::MAX_REQUIRED_GPUS;
use crate::error::SolverError;

/// Convert a signed user count from the outside world, rejecting negatives.
pub fn parse_users(value: i64) -> Result<u64, SolverError> {
    u64::try_from(value).map_err(|_| {
        SolverError::InvalidArgument(format!("concurrent users must be >= 0, got {value}"))
    })
}

/// Estimate how many GPUs keep every user's response within the latency
/// target.
///
/// Each user is assumed to have one request in flight per latency window,
/// so the fleet must finish `users / max_latency` requests per second.
/// Any positive load gets at least one GPU. Demand above
/// [`MAX_REQUIRED_GPUS`] is rejected rather than planned.
pub fn estimate_demand(
    concurrent_users: u64,
    workload: &Workload,
    output_tokens_per_second: f64,
) -> Result<DemandEstimate, SolverError> {
    if !output_tokens_per_second.is_finite() || output_tokens_per_second <= 0.0 {
        return Err(SolverError::Configuration(format!(
            "GPU throughput must be positive, got {output_tokens_per_second} tokens/s"
        )));
    }
    workload.validate()?;

    let requests_per_second_per_gpu =
        output_tokens_per_second / f64::from(workload.output_tokens_per_request);
    let total_requests_per_second = concurrent_users as f64 / workload.max_latency_seconds;

    let gpus_needed = if concurrent_users == 0 {
        0
    } else {
        let exact = (total_requests_per_second / requests_per_second_per_gpu).ceil();
        if exact > f64::from(MAX_REQUIRED_GPUS) {
            return Err(SolverError::InvalidArgument(format!(
                "{concurrent_users} users need {exact} GPUs, above the planning limit of {MAX_REQUIRED_GPUS}"
            )));
        }
        (exact as u32).max(1)
    };

    tracing::debug!(
        concurrent_users,
        requests_per_second_per_gpu,
        total_requests_per_second,
        gpus_needed,
        "estimated GPU demand"
    );

    Ok(DemandEstimate {
        requests_per_second_per_gpu,
        total_requests_per_second,
        gpus_needed,
    })
}
