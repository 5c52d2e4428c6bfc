//! Core Kernel - Foundational types shared by the pricing workspace
//!
//! This crate provides the building blocks used by the pricing domain and
//! the quote API:
//! - Money and Rate types with precise decimal arithmetic
//! - Calendar helpers (completed-years age, jurisdiction timezone)
//! - Identifiers for records handed to checkout collaborators

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use temporal::{Timezone, TemporalError, completed_years, parse_iso_date};
pub use identifiers::PurchaseId;
pub use error::CoreError;
