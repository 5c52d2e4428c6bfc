//! Life premium
//!
//! A life premium is an age-banded rate applied to the coverage amount.
//!
//! Two rate tables are in use and they disagree on the middle band: the
//! quote-comparison flow prices ages (30, 50] at 0.4% while the application
//! form prices (35, 50] at that rate. The application form also treats its
//! rate as yearly where the comparison flow treats it as monthly. Both are
//! kept as separate named tables; the caller picks one with [`LifeTable`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{completed_years, Money, Rate};

use crate::bands::{Band, BandTable};
use crate::error::PricingError;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Which life rate table a flow prices against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeTable {
    /// Quote comparison: (30, 50] band, monthly rate
    #[default]
    Comparison,
    /// Application form: (35, 50] band, yearly rate
    Application,
}

impl LifeTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeTable::Comparison => "comparison",
            LifeTable::Application => "application",
        }
    }
}

impl fmt::Display for LifeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifeTable {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comparison" => Ok(LifeTable::Comparison),
            "application" => Ok(LifeTable::Application),
            other => Err(PricingError::UnknownLifeTable(other.to_string())),
        }
    }
}

/// Period the table's rate is quoted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    /// `monthly = rate × coverage`, `annual = monthly × 12`
    #[default]
    Monthly,
    /// `annual = rate × coverage`, `monthly = annual / 12`
    Annual,
}

/// Rule set for one life rate table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeRules {
    pub age_rates: BandTable<Rate>,
    #[serde(default)]
    pub rate_basis: RateBasis,
}

impl LifeRules {
    /// Table used by the quote-comparison flow
    pub fn comparison() -> Self {
        Self {
            age_rates: BandTable::new(
                Rate::new(dec!(0.002)),
                vec![
                    Band::bounded(30, 50, Rate::new(dec!(0.004))),
                    Band::above(50, Rate::new(dec!(0.01))),
                ],
            ),
            rate_basis: RateBasis::Monthly,
        }
    }

    /// Table used by the application form
    pub fn application() -> Self {
        Self {
            age_rates: BandTable::new(
                Rate::new(dec!(0.002)),
                vec![
                    Band::bounded(35, 50, Rate::new(dec!(0.004))),
                    Band::above(50, Rate::new(dec!(0.01))),
                ],
            ),
            rate_basis: RateBasis::Annual,
        }
    }

    pub fn rate_for_age(&self, age: i32) -> Rate {
        *self.age_rates.lookup(age)
    }

    /// Prices a life application
    ///
    /// # Arguments
    ///
    /// * `input` - Age or date of birth, and coverage
    /// * `today` - Date used to derive age from a date of birth
    pub fn price(&self, input: &LifePremiumInput, today: NaiveDate) -> LifePremiumResult {
        let age = input.resolve_age(today);
        let rate = self.rate_for_age(age);
        let scaled = rate.apply(&input.coverage);

        let (monthly_premium, annual_premium) = match self.rate_basis {
            RateBasis::Monthly => (scaled, scaled * MONTHS_PER_YEAR),
            RateBasis::Annual => (scaled / MONTHS_PER_YEAR, scaled),
        };

        LifePremiumResult {
            age,
            rate,
            rate_basis: self.rate_basis,
            monthly_premium,
            annual_premium,
        }
    }

    pub(crate) fn validate(&self, table: &str) -> Result<(), PricingError> {
        self.age_rates.validate(table)?;
        if self.age_rates.values().any(Rate::is_negative) {
            return Err(PricingError::invalid_tariff(format!("{} has a negative rate", table)));
        }
        Ok(())
    }
}

/// Inputs to the life premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePremiumInput {
    /// Explicit age; wins over `date_of_birth`
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub coverage: Money,
}

impl LifePremiumInput {
    pub fn with_age(age: i32, coverage: Money) -> Self {
        Self {
            age: Some(age),
            date_of_birth: None,
            coverage,
        }
    }

    pub fn with_date_of_birth(date_of_birth: NaiveDate, coverage: Money) -> Self {
        Self {
            age: None,
            date_of_birth: Some(date_of_birth),
            coverage,
        }
    }

    /// Resolves the applicant's age: explicit age, else completed years
    /// since the date of birth, else 0
    pub fn resolve_age(&self, today: NaiveDate) -> i32 {
        self.age
            .or_else(|| self.date_of_birth.map(|dob| completed_years(dob, today)))
            .unwrap_or(0)
    }
}

/// Life premium with both payment periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePremiumResult {
    /// Age the rate was selected for
    pub age: i32,
    pub rate: Rate,
    pub rate_basis: RateBasis,
    pub monthly_premium: Money,
    pub annual_premium: Money,
}

impl LifePremiumResult {
    /// Amount a purchase is charged
    ///
    /// A table quoted per month charges the annual premium; a table quoted
    /// per year is paid in monthly instalments and charges the monthly one.
    pub fn charged_premium(&self) -> Money {
        match self.rate_basis {
            RateBasis::Monthly => self.annual_premium,
            RateBasis::Annual => self.monthly_premium,
        }
    }
}

/// Prices a life application against the comparison table
pub fn compute_life_premium(input: &LifePremiumInput, today: NaiveDate) -> LifePremiumResult {
    LifeRules::comparison().price(input, today)
}
