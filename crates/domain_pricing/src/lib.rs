//! Premium Pricing Domain
//!
//! This crate implements the premium rules for the three product lines sold
//! through the quote forms. It is infrastructure-agnostic: no storage, no
//! clock, no formatting.
//!
//! # Products
//!
//! - **Health**: age-banded share of a base premium plus flat risk surcharges
//! - **Car**: vehicle-age-banded percentage of insured value, with a value
//!   sub-bracket for 3–5 year old vehicles
//! - **Life**: age-banded rate on coverage, as monthly and annual premium
//!
//! Every calculator is a total, pure function of its inputs. "Today" and
//! "the current year" are always explicit arguments.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::{compute_health_premium, HealthPremiumInput, RiskFlag};
//!
//! let input = HealthPremiumInput::new(35, RiskFlag::Yes, RiskFlag::No, RiskFlag::No);
//! let breakdown = compute_health_premium(&input);
//! assert_eq!(breakdown.total.amount(), dec!(3500000));
//! ```

pub mod bands;
pub mod risk;
pub mod health;
pub mod car;
pub mod life;
pub mod tariff;
pub mod calculator;
pub mod purchase;
pub mod error;

pub use bands::{Band, BandTable};
pub use risk::RiskFlag;
pub use health::{compute_health_premium, HealthPremiumBreakdown, HealthPremiumInput, HealthRules};
pub use car::{compute_car_premium, CarPremiumInput, CarPremiumResult, CarRate, CarRules};
pub use life::{
    compute_life_premium, LifePremiumInput, LifePremiumResult, LifeRules, LifeTable, RateBasis,
};
pub use tariff::Tariff;
pub use calculator::PremiumCalculator;
pub use purchase::{Product, Purchase, PurchaseDetails, PurchaseHistory, PurchaseStatus};
pub use error::PricingError;
