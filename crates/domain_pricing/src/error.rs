//! Pricing domain errors
//!
//! The calculators themselves are total and never fail. These errors come
//! from loading tariffs and from moving purchase records through checkout.

use thiserror::Error;

/// Errors that can occur in the pricing domain
#[derive(Debug, Error)]
pub enum PricingError {
    /// Tariff document could not be parsed
    #[error("Failed to parse tariff: {0}")]
    TariffParse(String),

    /// Tariff file could not be read
    #[error("Tariff file not found: {0}")]
    TariffNotFound(String),

    /// Tariff parsed but its tables are unusable
    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),

    /// Unknown life rate table name
    #[error("Unknown life rate table: {0}")]
    UnknownLifeTable(String),

    /// Purchase status cannot move as requested
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: String,
        to: String,
    },

    /// Purchase record contradicts its own details or its tariff price
    #[error("Inconsistent purchase {id}: {reason}")]
    InconsistentPurchase {
        id: String,
        reason: String,
    },

    /// Only settled purchases belong in the history
    #[error("Purchase {0} has not been paid")]
    UnpaidPurchase(String),
}

impl PricingError {
    /// Creates an invalid tariff error
    pub fn invalid_tariff(message: impl Into<String>) -> Self {
        PricingError::InvalidTariff(message.into())
    }

    pub fn transition(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        PricingError::InvalidStatusTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
