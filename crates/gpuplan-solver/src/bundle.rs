use std::collections::BTreeMap;

use gpuplan_core::models::bundle::Bundle;
use gpuplan_core::models::catalog::SkuCatalog;

use crate::error::SolverError;

/// Largest GPU requirement the solver will plan. The DP table holds one
/// slot per GPU, so this bounds its memory to a few megabytes.
pub const MAX_REQUIRED_GPUS: u32 = 100_000;

/// Convert a signed GPU requirement from the outside world. Negative
/// values are rejected, never clamped, and so is anything above
/// [`MAX_REQUIRED_GPUS`].
pub fn parse_requirement(value: i64) -> Result<u32, SolverError> {
    if value < 0 {
        return Err(SolverError::InvalidArgument(format!(
            "required GPUs must be >= 0, got {value}"
        )));
    }
    if value > i64::from(MAX_REQUIRED_GPUS) {
        return Err(SolverError::InvalidArgument(format!(
            "required GPUs {value} exceeds the planning limit of {MAX_REQUIRED_GPUS}"
        )));
    }
    Ok(value as u32)
}

/// Find the cheapest multiset of servers whose GPUs add up to exactly
/// `required_gpus`, with unlimited supply of every size.
///
/// Dynamic programming over exact GPU counts. Sizes are tried largest
/// first and a candidate only replaces the incumbent when strictly
/// cheaper, so ties always resolve to the larger server.
///
/// Memory is linear in `required_gpus`; inputs from outside the process
/// must pass through [`parse_requirement`] or
/// [`estimate_demand`](crate::demand::estimate_demand) first.
pub fn optimal_bundle(required_gpus: u32, catalog: &SkuCatalog) -> Bundle {
    if required_gpus == 0 {
        return Bundle::empty();
    }

    let n = required_gpus as usize;
    let servers: Vec<(usize, f64)> = catalog
        .iter()
        .rev()
        .map(|(size, price)| (size as usize, price))
        .collect();

    // cost[i]: cheapest exact cover of i GPUs; winner[i]: the last server
    // added to reach it.
    let mut cost: Vec<Option<f64>> = vec![None; n + 1];
    let mut winner: Vec<usize> = vec![0; n + 1];
    cost[0] = Some(0.0);

    for i in 1..=n {
        for &(size, price) in &servers {
            if size == 0 || size > i {
                continue;
            }
            let Some(prev) = cost[i - size] else {
                continue;
            };
            let candidate = prev + price;
            if cost[i].is_none_or(|best| candidate < best) {
                cost[i] = Some(candidate);
                winner[i] = size;
            }
        }
    }

    let Some(total) = cost[n] else {
        tracing::debug!(
            required_gpus,
            sizes = catalog.len(),
            "no exact server cover"
        );
        return Bundle::Infeasible { required_gpus };
    };

    let mut breakdown = BTreeMap::new();
    let mut remaining = n;
    while remaining > 0 {
        let size = winner[remaining];
        *breakdown.entry(size as u32).or_insert(0) += 1;
        remaining -= size;
    }

    tracing::debug!(
        required_gpus,
        sizes = catalog.len(),
        cost = total,
        servers = breakdown.values().sum::<u32>(),
        "solved server bundle"
    );

    Bundle::Feasible {
        cost: total,
        breakdown,
    }
}
