use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::catalog::SkuCatalog;
use crate::error::CoreError;

/// A servable LLM and the hardware it is priced on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelProfile {
    /// Stable slug used in requests, e.g. "t-lite".
    pub id: String,
    /// Human-readable name, e.g. "T-lite (8B)".
    pub display_name: String,
    /// GPU the servers carry, e.g. "A100 40GB".
    pub gpu_type: String,
    /// Sustained output tokens per second on one GPU.
    pub output_tokens_per_second: f64,
    pub servers: SkuCatalog,
}

impl ModelProfile {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::InvalidConfig("model id must not be empty".into()));
        }
        if !self.output_tokens_per_second.is_finite() || self.output_tokens_per_second <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "model '{}': output_tokens_per_second must be positive, got {}",
                self.id, self.output_tokens_per_second
            )));
        }
        self.servers
            .validate()
            .map_err(|e| CoreError::InvalidConfig(format!("model '{}': {e}", self.id)))
    }
}

/// Request shape and latency target shared by every model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Workload {
    /// Average prompt length. Informational; throughput figures already
    /// account for prefill.
    pub input_tokens_per_request: u32,
    pub output_tokens_per_request: u32,
    /// Longest acceptable time to finish one response.
    pub max_latency_seconds: f64,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            input_tokens_per_request: 2048,
            output_tokens_per_request: 500,
            max_latency_seconds: 10.0,
        }
    }
}

impl Workload {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.output_tokens_per_request == 0 {
            return Err(CoreError::InvalidConfig(
                "output_tokens_per_request must be positive".into(),
            ));
        }
        if !self.max_latency_seconds.is_finite() || self.max_latency_seconds <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "max_latency_seconds must be positive, got {}",
                self.max_latency_seconds
            )));
        }
        Ok(())
    }
}
