//! gpuplan-core
//!
//! Pure domain types, built-in pricing tables, and the pricing file format.
//! No solver logic lives here; this is the shared vocabulary of gpuplan.

pub mod error;
pub mod models;
pub mod pricing;
