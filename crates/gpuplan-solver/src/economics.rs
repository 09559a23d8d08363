use serde::Serialize;
use ts_rs::TS;

/// Billing month used for token volume: 30 days.
pub const SECONDS_PER_MONTH: f64 = 30.0 * 24.0 * 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct UnitEconomics {
    pub cost_per_user: f64,
    /// Output tokens the provisioned GPUs produce in a month at full load.
    pub monthly_tokens: f64,
    pub cost_per_million_tokens: f64,
}

/// Normalize a monthly total per user and per million output tokens.
///
/// With no users or no GPUs there is nothing to normalize against and both
/// metrics are 0.
pub fn unit_economics(
    total_cost: f64,
    concurrent_users: u64,
    gpus_needed: u32,
    output_tokens_per_second: f64,
) -> UnitEconomics {
    let monthly_tokens = f64::from(gpus_needed) * output_tokens_per_second * SECONDS_PER_MONTH;

    let cost_per_user = if concurrent_users == 0 {
        0.0
    } else {
        total_cost / concurrent_users as f64
    };
    let cost_per_million_tokens = if monthly_tokens > 0.0 {
        total_cost / (monthly_tokens / 1_000_000.0)
    } else {
        0.0
    };

    UnitEconomics {
        cost_per_user,
        monthly_tokens,
        cost_per_million_tokens,
    }
}
