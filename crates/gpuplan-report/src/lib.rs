//! gpuplan-report
//!
//! Human-readable text for cost plans, rendered from Tera templates.

pub mod error;
pub mod format;
pub mod render;
pub mod summary;
mod templates;
