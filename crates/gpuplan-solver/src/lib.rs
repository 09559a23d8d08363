//! gpuplan-solver
//!
//! Turns a model and a concurrent-user count into a monthly cost plan:
//! GPU demand, the cheapest server bundle, license fees, and unit
//! economics. Every function is pure; pricing tables are passed in.

pub mod bundle;
pub mod demand;
pub mod economics;
pub mod error;
pub mod license;
pub mod plan;
