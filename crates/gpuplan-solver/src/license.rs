use gpuplan_core::models::license::{LicenseTier, LicenseTiers};
use serde::Serialize;
use ts_rs::TS;

/// License fees for a GPU count. One license is needed per GPU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct LicenseQuote {
    pub tier: Option<LicenseTier>,
    pub price_per_gpu: f64,
    pub cost: f64,
}

/// Price `gpus` licenses at the volume tier that count falls in.
pub fn license_cost(gpus: u32, tiers: &LicenseTiers) -> LicenseQuote {
    let Some(tier) = LicenseTier::for_gpus(gpus) else {
        return LicenseQuote {
            tier: None,
            price_per_gpu: 0.0,
            cost: 0.0,
        };
    };
    let price_per_gpu = tiers.price(tier);
    LicenseQuote {
        tier: Some(tier),
        price_per_gpu,
        cost: price_per_gpu * f64::from(gpus),
    }
}
