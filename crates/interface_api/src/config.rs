//! API configuration

use serde::Deserialize;
use std::path::PathBuf;

use core_kernel::{CoreError, Currency, Timezone};
use domain_pricing::{PricingError, Tariff};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Timezone in which "today" and the current year are read
    pub timezone: Timezone,
    /// Tariff JSON file; the built-in tariff is used when unset
    pub tariff_path: Option<PathBuf>,
    /// Currency of amounts submitted through the quote forms
    pub default_currency: Currency,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            timezone: Timezone::default(),
            tariff_path: None,
            default_currency: Currency::IDR,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, CoreError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads the configured tariff
    ///
    /// # Returns
    ///
    /// The tariff read from `tariff_path`, or the built-in tariff when no
    /// path is configured
    pub fn load_tariff(&self) -> Result<Tariff, PricingError> {
        match &self.tariff_path {
            Some(path) => Tariff::from_file(path),
            None => Ok(Tariff::standard()),
        }
    }
}
