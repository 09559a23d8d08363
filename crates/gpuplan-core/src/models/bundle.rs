use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of covering a GPU requirement with server SKUs.
///
/// `Infeasible` carries no cost; callers branch on it before any arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Bundle {
    Feasible {
        /// Monthly cost of all chosen servers.
        cost: f64,
        /// Server size (GPUs) → number of servers of that size. Only
        /// sizes with a non-zero count appear.
        breakdown: BTreeMap<u32, u32>,
    },
    Infeasible {
        required_gpus: u32,
    },
}

impl Bundle {
    /// The bundle for a zero-GPU requirement.
    pub fn empty() -> Self {
        Self::Feasible {
            cost: 0.0,
            breakdown: BTreeMap::new(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    pub fn cost(&self) -> Option<f64> {
        match self {
            Self::Feasible { cost, .. } => Some(*cost),
            Self::Infeasible { .. } => None,
        }
    }

    pub fn breakdown(&self) -> Option<&BTreeMap<u32, u32>> {
        match self {
            Self::Feasible { breakdown, .. } => Some(breakdown),
            Self::Infeasible { .. } => None,
        }
    }

    /// Total GPUs supplied by the chosen servers.
    pub fn total_gpus(&self) -> u32 {
        self.breakdown()
            .map(|b| b.iter().map(|(size, count)| size * count).sum())
            .unwrap_or(0)
    }

    /// Number of physical servers in the bundle.
    pub fn server_count(&self) -> u32 {
        self.breakdown().map(|b| b.values().sum()).unwrap_or(0)
    }

    /// `(size, count)` pairs, largest servers first.
    pub fn largest_first(&self) -> Vec<(u32, u32)> {
        self.breakdown()
            .map(|b| b.iter().rev().map(|(&s, &c)| (s, c)).collect())
            .unwrap_or_default()
    }

    /// Human-readable configuration, e.g. "1 × 8-GPU server, 2 × 1-GPU server".
    pub fn describe(&self) -> String {
        match self {
            Self::Infeasible { required_gpus } => {
                format!("no server combination covers exactly {required_gpus} GPUs")
            }
            Self::Feasible { breakdown, .. } if breakdown.is_empty() => {
                "no GPUs needed".to_string()
            }
            Self::Feasible { .. } => self
                .largest_first()
                .iter()
                .map(|(size, count)| format!("{count} × {size}-GPU server"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
