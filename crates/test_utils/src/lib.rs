//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! premium pricing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Reference inputs with known premiums
//! - `assertions`: Assertion helpers for breakdowns and results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
