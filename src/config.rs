//! Engine configuration

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{EngineError, EngineResult};

/// Tunable business constants for the engine.
///
/// Every field has a default matching the seller's registration (Gujarat,
/// India, 18% GST, INR books), so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Country in which GST applies
    pub home_country: String,
    /// State of registration; sales inside it split into CGST + SGST
    pub home_state: String,
    /// Total GST rate percentage
    pub gst_rate: BigDecimal,
    /// Decimal places tax lines are rounded to
    pub tax_decimal_places: i64,
    /// Currency the books are kept in
    pub base_currency: String,
    /// Statement description for deposits without a notice
    pub default_deposit_description: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            home_country: "India".to_string(),
            home_state: "Gujarat".to_string(),
            gst_rate: BigDecimal::from(18),
            tax_decimal_places: 2,
            base_currency: "INR".to_string(),
            default_deposit_description: "Deposit".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded engine config from {}", path.display());
        Self::from_json_str(&raw)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> EngineResult<()> {
        if self.home_country.trim().is_empty() {
            return Err(EngineError::Config("home_country cannot be empty".to_string()));
        }

        if self.gst_rate < BigDecimal::from(0) || self.gst_rate > BigDecimal::from(100) {
            return Err(EngineError::Config(format!(
                "gst_rate must be between 0 and 100, got {}",
                self.gst_rate
            )));
        }

        if !(0..=6).contains(&self.tax_decimal_places) {
            return Err(EngineError::Config(format!(
                "tax_decimal_places must be between 0 and 6, got {}",
                self.tax_decimal_places
            )));
        }

        Ok(())
    }
}
