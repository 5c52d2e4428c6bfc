//! Tariff loading
//!
//! A tariff bundles every product's rule set so that band tables can be
//! maintained as data. The built-in [`Tariff::standard`] reproduces the
//! published rates; a JSON document with the same shape can replace it.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::Tariff;
//!
//! let tariff = Tariff::from_file(Path::new("tariffs/2024.json"))?;
//! let rules = tariff.life(LifeTable::Application);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::car::CarRules;
use crate::error::PricingError;
use crate::health::HealthRules;
use crate::life::{LifeRules, LifeTable};

/// Every product's rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Label carried into logs
    #[serde(default = "default_name")]
    pub name: String,
    pub health: HealthRules,
    pub car: CarRules,
    pub life_comparison: LifeRules,
    pub life_application: LifeRules,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl Tariff {
    /// The published tariff
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            health: HealthRules::standard(),
            car: CarRules::standard(),
            life_comparison: LifeRules::comparison(),
            life_application: LifeRules::application(),
        }
    }

    /// Parses and validates a tariff from a JSON string
    ///
    /// # Arguments
    ///
    /// * `json_str` - JSON document with `health`, `car`, `life_comparison`
    ///   and `life_application` sections
    ///
    /// # Returns
    ///
    /// A validated tariff, or the parse/validation error
    pub fn from_json(json_str: &str) -> Result<Self, PricingError> {
        let tariff: Tariff = serde_json::from_str(json_str)
            .map_err(|e| PricingError::TariffParse(e.to_string()))?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Loads a tariff from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, PricingError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| PricingError::TariffNotFound(path.display().to_string()))?;

        Self::from_json(&content)
    }

    /// Serializes the tariff as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, PricingError> {
        serde_json::to_string_pretty(self).map_err(|e| PricingError::TariffParse(e.to_string()))
    }

    /// Checks every table in the tariff
    pub fn validate(&self) -> Result<(), PricingError> {
        self.health.validate()?;
        self.car.validate()?;
        self.life_comparison.validate("life_comparison.age_rates")?;
        self.life_application.validate("life_application.age_rates")?;
        Ok(())
    }

    /// Returns the life rules for a flow
    pub fn life(&self, table: LifeTable) -> &LifeRules {
        match table {
            LifeTable::Comparison => &self.life_comparison,
            LifeTable::Application => &self.life_application,
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}
