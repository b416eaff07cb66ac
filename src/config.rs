use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Engine parameters with the documented defaults. Loadable from a TOML file;
/// CLI flags take precedence over file values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Forecast length in days
    pub horizon_days: u32,
    /// Supplier replenishment lead time in days
    pub lead_time_days: u32,
    /// Safety-stock z-score equivalent (1.65 ~ 95% one-sided service level)
    pub service_factor: f64,
    /// Confidence level for forecast bounds
    pub confidence_level: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_days: 30,
            lead_time_days: 7,
            service_factor: 1.65,
            confidence_level: 0.80,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ForecastError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ForecastError::ParseError(e.to_string()))
    }
}
