pub mod bundle;
pub mod health;
pub mod models;
pub mod plan;
