use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Volume breakpoints for per-GPU license pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LicenseTier {
    /// Exactly 1 GPU.
    One,
    /// Exactly 2 GPUs.
    Two,
    /// 3–4 GPUs.
    ThreeToFour,
    /// 5 or more GPUs.
    FivePlus,
}

impl LicenseTier {
    /// Tier for a GPU count; `None` when no GPUs are licensed.
    pub fn for_gpus(gpus: u32) -> Option<Self> {
        match gpus {
            0 => None,
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3..=4 => Some(Self::ThreeToFour),
            _ => Some(Self::FivePlus),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::ThreeToFour => "3-4",
            Self::FivePlus => "5+",
        }
    }
}

/// Monthly price of one license (one license per GPU) at each tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LicenseTiers {
    pub one: f64,
    pub two: f64,
    pub three_to_four: f64,
    pub five_plus: f64,
}

impl LicenseTiers {
    pub fn price(&self, tier: LicenseTier) -> f64 {
        match tier {
            LicenseTier::One => self.one,
            LicenseTier::Two => self.two,
            LicenseTier::ThreeToFour => self.three_to_four,
            LicenseTier::FivePlus => self.five_plus,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for tier in [
            LicenseTier::One,
            LicenseTier::Two,
            LicenseTier::ThreeToFour,
            LicenseTier::FivePlus,
        ] {
            let price = self.price(tier);
            if !price.is_finite() || price < 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "license price for tier {} must be a non-negative number, got {price}",
                    tier.label()
                )));
            }
        }
        Ok(())
    }
}
