//! Health premium
//!
//! The annual health premium is a base amount, plus an age-banded share of
//! the base, plus flat surcharges (each a fixed share of the base) for
//! smoking, hypertension and diabetes.
//!
//! ```text
//! total = P + m·P + k1·0.5·P + k2·0.4·P + k3·0.5·P
//! ```

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{completed_years, Money, Rate};

use crate::bands::{Band, BandTable};
use crate::error::PricingError;
use crate::risk::RiskFlag;

/// Standard base premium: Rp 2,000,000
pub fn standard_base_premium() -> Money {
    Money::idr(dec!(2000000))
}

/// Rule set for the health product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRules {
    /// Base premium used when the input carries none
    pub base_premium: Money,
    /// Age multiplier `m` by completed years
    pub age_multipliers: BandTable<Rate>,
    /// Share of base charged to smokers
    pub smoker_loading: Rate,
    /// Share of base charged for hypertension
    pub hypertension_loading: Rate,
    /// Share of base charged for diabetes
    pub diabetes_loading: Rate,
}

impl HealthRules {
    /// The published health tariff
    pub fn standard() -> Self {
        Self {
            base_premium: standard_base_premium(),
            age_multipliers: BandTable::new(
                Rate::new(dec!(0.1)),
                vec![
                    Band::bounded(20, 30, Rate::new(dec!(0.2))),
                    Band::bounded(30, 40, Rate::new(dec!(0.25))),
                    Band::above(40, Rate::new(dec!(0.4))),
                ],
            ),
            smoker_loading: Rate::new(dec!(0.5)),
            hypertension_loading: Rate::new(dec!(0.4)),
            diabetes_loading: Rate::new(dec!(0.5)),
        }
    }

    /// Returns the age multiplier `m` for an age
    pub fn age_multiplier(&self, age: i32) -> Rate {
        *self.age_multipliers.lookup(age)
    }

    /// Prices a health application
    ///
    /// # Arguments
    ///
    /// * `input` - Applicant age, risk answers and optional base override
    ///
    /// # Returns
    ///
    /// The full breakdown; `total` is the sum of the five components
    pub fn price(&self, input: &HealthPremiumInput) -> HealthPremiumBreakdown {
        let base = input.base.unwrap_or(self.base_premium);
        let age_multiplier = self.age_multiplier(input.age);

        let age_factor = age_multiplier.apply(&base);
        let smoke_surcharge = base.multiply(input.smoker.indicator() * self.smoker_loading.as_decimal());
        let hyper_surcharge =
            base.multiply(input.hypertensive.indicator() * self.hypertension_loading.as_decimal());
        let diabetes_surcharge =
            base.multiply(input.diabetic.indicator() * self.diabetes_loading.as_decimal());

        let total = base + age_factor + smoke_surcharge + hyper_surcharge + diabetes_surcharge;

        HealthPremiumBreakdown {
            base,
            age_multiplier,
            age_factor,
            smoke_surcharge,
            hyper_surcharge,
            diabetes_surcharge,
            total,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), PricingError> {
        self.age_multipliers.validate("health.age_multipliers")?;
        if !self.base_premium.is_positive() {
            return Err(PricingError::invalid_tariff(
                "health.base_premium must be positive",
            ));
        }
        let loadings = [
            ("health.age_multipliers", self.age_multipliers.values().any(Rate::is_negative)),
            ("health.smoker_loading", self.smoker_loading.is_negative()),
            ("health.hypertension_loading", self.hypertension_loading.is_negative()),
            ("health.diabetes_loading", self.diabetes_loading.is_negative()),
        ];
        if let Some((name, _)) = loadings.iter().find(|(_, negative)| *negative) {
            return Err(PricingError::invalid_tariff(format!("{} has a negative rate", name)));
        }
        Ok(())
    }
}

impl Default for HealthRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Inputs to the health premium
///
/// A missing age is represented as 0, which prices in the lowest band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthPremiumInput {
    /// Age in completed years
    pub age: i32,
    pub smoker: RiskFlag,
    pub hypertensive: RiskFlag,
    pub diabetic: RiskFlag,
    /// Overrides the tariff's base premium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Money>,
}

impl HealthPremiumInput {
    pub fn new(age: i32, smoker: RiskFlag, hypertensive: RiskFlag, diabetic: RiskFlag) -> Self {
        Self {
            age,
            smoker,
            hypertensive,
            diabetic,
            base: None,
        }
    }

    /// Builds the input from a date of birth, as the application form does
    pub fn from_date_of_birth(
        date_of_birth: NaiveDate,
        today: NaiveDate,
        smoker: RiskFlag,
        hypertensive: RiskFlag,
        diabetic: RiskFlag,
    ) -> Self {
        Self::new(completed_years(date_of_birth, today), smoker, hypertensive, diabetic)
    }

    /// Uses a base premium other than the tariff's
    pub fn with_base(mut self, base: Money) -> Self {
        self.base = Some(base);
        self
    }
}

/// Itemised health premium, all amounts per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPremiumBreakdown {
    /// Base premium `P`
    pub base: Money,
    /// Age multiplier `m` that produced `age_factor`
    pub age_multiplier: Rate,
    /// `m × P`
    pub age_factor: Money,
    pub smoke_surcharge: Money,
    pub hyper_surcharge: Money,
    pub diabetes_surcharge: Money,
    /// Sum of base, age factor and the three surcharges
    pub total: Money,
}

impl HealthPremiumBreakdown {
    /// Sum of the three risk surcharges
    pub fn risk_surcharges(&self) -> Money {
        self.smoke_surcharge + self.hyper_surcharge + self.diabetes_surcharge
    }
}

/// Prices a health application against the standard tariff
pub fn compute_health_premium(input: &HealthPremiumInput) -> HealthPremiumBreakdown {
    HealthRules::standard().price(input)
}
