use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Server SKUs available for one model: GPUs per server → monthly price.
///
/// Backed by a `BTreeMap` so sizes always enumerate in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkuCatalog(BTreeMap<u32, f64>);

impl SkuCatalog {
    /// Build a catalog, rejecting zero-GPU servers and negative or
    /// non-finite prices.
    pub fn new(entries: impl IntoIterator<Item = (u32, f64)>) -> Result<Self, CoreError> {
        let catalog = Self(entries.into_iter().collect());
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            return Err(CoreError::InvalidCatalog("catalog has no servers".into()));
        }
        for (&size, &price) in &self.0 {
            if size == 0 {
                return Err(CoreError::InvalidCatalog(
                    "server size must be at least 1 GPU".into(),
                ));
            }
            if !price.is_finite() || price < 0.0 {
                return Err(CoreError::InvalidCatalog(format!(
                    "price {price} for {size}-GPU server must be a non-negative number"
                )));
            }
        }
        Ok(())
    }

    pub fn price(&self, size: u32) -> Option<f64> {
        self.0.get(&size).copied()
    }

    /// Server sizes in ascending order.
    pub fn sizes(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&size, &price)| (size, price))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a single-GPU server exists, which makes every requirement
    /// exactly coverable.
    pub fn has_unit_server(&self) -> bool {
        self.0.contains_key(&1)
    }
}
