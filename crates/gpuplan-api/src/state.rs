use std::sync::Arc;

use gpuplan_core::pricing::Pricing;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Pricing is loaded once at startup and only ever read.
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<Pricing>,
}

impl AppState {
    pub fn new(pricing: Pricing) -> Self {
        Self {
            pricing: Arc::new(pricing),
        }
    }
}
