//! Quote DTOs
//!
//! Request bodies mirror the quote forms: risk answers arrive as the form's
//! own strings ("Ya" / "Tidak"), dates as `YYYY-MM-DD` text, and amounts as
//! decimals in the configured currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain_pricing::Purchase;

fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(ValidationError::new("positive").with_message("must be greater than zero".into()))
    }
}

fn non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(ValidationError::new("non_negative").with_message("must not be negative".into()))
    } else {
        Ok(())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct HealthQuoteRequest {
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    /// Explicit age; wins over `date_of_birth`
    #[validate(range(max = 150))]
    pub age: Option<i32>,
    pub date_of_birth: Option<String>,
    pub occupation: Option<String>,
    /// "Ya" or "Merokok" for smokers
    #[serde(default)]
    pub smoker: String,
    #[serde(default)]
    pub hypertensive: String,
    #[serde(default)]
    pub diabetic: String,
    pub plan: Option<String>,
    #[validate(length(min = 1, max = 254))]
    pub user: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CarQuoteRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    /// Year of first registration; missing prices as a new vehicle
    #[validate(range(min = 1900, max = 2100))]
    pub registration_year: Option<i32>,
    #[validate(custom(function = "positive_amount"))]
    pub insured_value: Decimal,
    pub plate_number: Option<String>,
    pub owner_name: Option<String>,
    pub plan: Option<String>,
    #[validate(length(min = 1, max = 254))]
    pub user: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LifeQuoteRequest {
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    #[validate(range(max = 150))]
    pub age: Option<i32>,
    pub date_of_birth: Option<String>,
    /// Coverage must be positive on the application flow
    #[validate(custom(function = "non_negative_amount"))]
    pub coverage: Decimal,
    /// "comparison" (default) or "application"
    pub flow: Option<String>,
    pub plan: Option<String>,
    #[validate(length(min = 1, max = 254))]
    pub user: Option<String>,
}

/// Computed premium plus the pending purchase built from it
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse<T> {
    pub quote: T,
    pub purchase: Purchase,
}
