pub mod bundle;
pub mod catalog;
pub mod license;
pub mod plan;
pub mod profile;
