use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::catalog::SkuCatalog;
use crate::models::license::LicenseTiers;
use crate::models::profile::{ModelProfile, Workload};

/// Current pricing file version. Bump this when adding fields or changing
/// shape. Each bump requires a corresponding step in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const DEFAULT_CURRENCY: &str = "RUB";

/// Every table a cost computation reads. Passed by reference into each
/// computation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pricing {
    /// Schema version. Missing or 0 = pre-versioned file.
    #[serde(default)]
    pub config_version: u32,
    /// Added in v1; v0 files implicitly priced in roubles.
    pub currency: String,
    /// Added in v1; v0 files used the built-in workload.
    pub workload: Workload,
    pub license_tiers: LicenseTiers,
    pub models: Vec<ModelProfile>,
}

impl Pricing {
    /// The tables shipped with gpuplan.
    pub fn builtin() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            currency: DEFAULT_CURRENCY.to_string(),
            workload: Workload::default(),
            license_tiers: LicenseTiers {
                one: 150_000.0,
                two: 145_000.0,
                three_to_four: 140_000.0,
                five_plus: 130_000.0,
            },
            models: vec![
                ModelProfile {
                    id: "t-lite".to_string(),
                    display_name: "T-lite (8B)".to_string(),
                    gpu_type: "A100 40GB".to_string(),
                    output_tokens_per_second: 5727.0,
                    servers: builtin_catalog([100_000.0, 180_000.0, 280_000.0, 500_000.0]),
                },
                ModelProfile {
                    id: "t-pro".to_string(),
                    display_name: "T-pro (32B)".to_string(),
                    gpu_type: "A100 80GB".to_string(),
                    output_tokens_per_second: 1931.0,
                    servers: builtin_catalog([
                        300_000.0,
                        600_000.0,
                        1_200_000.0,
                        2_500_000.0,
                    ]),
                },
            ],
        }
    }

    /// Look up a model profile by id.
    pub fn model(&self, id: &str) -> Result<&ModelProfile, CoreError> {
        self.models
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::UnknownModel(id.to_string()))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.models.is_empty() {
            return Err(CoreError::InvalidConfig("no models defined".into()));
        }
        let mut seen = HashSet::new();
        for model in &self.models {
            if !seen.insert(model.id.as_str()) {
                return Err(CoreError::InvalidConfig(format!(
                    "duplicate model id '{}'",
                    model.id
                )));
            }
            model.validate()?;
        }
        self.workload.validate()?;
        self.license_tiers.validate()
    }

    /// Parse, migrate and validate a pricing document.
    pub fn from_json(contents: &str) -> Result<Self, CoreError> {
        // Parse as raw JSON so migrations run before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = match json.get("config_version") {
            None | Some(serde_json::Value::Null) => 0,
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    CoreError::InvalidConfig(format!(
                        "config_version {value} is not a valid version"
                    ))
                })?,
        };

        let migrated = migrate(json, on_disk_version)?;
        let pricing: Pricing = serde_json::from_value(migrated)?;
        pricing.validate()?;
        Ok(pricing)
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pricing = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            models = pricing.models.len(),
            "pricing loaded"
        );
        Ok(pricing)
    }

    /// Write the tables as pretty JSON, always stamped with the current
    /// version.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let io_err = |source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut stamped = self.clone();
        stamped.config_version = CURRENT_VERSION;
        let json = serde_json::to_string_pretty(&stamped)?;

        // Write to a temp file then rename for atomicity
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
        std::fs::rename(&tmp_path, path).map_err(io_err)?;

        tracing::info!(path = %path.display(), "pricing saved");
        Ok(())
    }
}

fn builtin_catalog(prices: [f64; 4]) -> SkuCatalog {
    let [one, two, four, eight] = prices;
    // Built from constants; the only failure mode is a negative literal.
    SkuCatalog::new([(1, one), (2, two), (4, four), (8, eight)])
        .unwrap_or_else(|e| panic!("built-in catalog is invalid: {e}"))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, CoreError> {
    if from_version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add currency and workload with the values v0 assumed
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| CoreError::InvalidConfig("pricing file is not a JSON object".into()))?;
        obj.entry("currency")
            .or_insert(serde_json::Value::String(DEFAULT_CURRENCY.to_string()));
        if !obj.contains_key("workload") {
            obj.insert("workload".to_string(), serde_json::to_value(Workload::default())?);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated pricing v0 → v1 (added currency, workload)");
    }

    Ok(json)
}
