//! Car premium
//!
//! The annual car premium is a percentage of the insured value, chosen by
//! vehicle age. In the 3–5 year band the percentage further depends on
//! whether the insured value is below a threshold.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::bands::{Band, BandTable};
use crate::error::PricingError;

/// How a vehicle-age band turns an insured value into a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CarRate {
    /// One rate regardless of value
    Flat { rate: Rate },
    /// `below` under the threshold amount, `at_or_above` from it upwards
    ValueTiered {
        threshold: Decimal,
        below: Rate,
        at_or_above: Rate,
    },
}

impl CarRate {
    pub fn flat(rate: Decimal) -> Self {
        CarRate::Flat { rate: Rate::new(rate) }
    }

    /// Resolves the rate for an insured value
    ///
    /// The threshold compares amounts only; it is expressed in the tariff's
    /// currency.
    pub fn rate_for(&self, insured_value: &Money) -> Rate {
        match self {
            CarRate::Flat { rate } => *rate,
            CarRate::ValueTiered {
                threshold,
                below,
                at_or_above,
            } => {
                if insured_value.amount() < *threshold {
                    *below
                } else {
                    *at_or_above
                }
            }
        }
    }

    fn has_negative_rate(&self) -> bool {
        match self {
            CarRate::Flat { rate } => rate.is_negative(),
            CarRate::ValueTiered { below, at_or_above, .. } => {
                below.is_negative() || at_or_above.is_negative()
            }
        }
    }
}

/// Rule set for the car product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRules {
    /// Rates by vehicle age in years; the default covers age ≤ 3
    pub vehicle_age_rates: BandTable<CarRate>,
}

impl CarRules {
    /// The published car tariff
    pub fn standard() -> Self {
        Self {
            vehicle_age_rates: BandTable::new(
                CarRate::flat(dec!(0.025)),
                vec![
                    Band::bounded(
                        3,
                        5,
                        CarRate::ValueTiered {
                            threshold: dec!(200000000),
                            below: Rate::new(dec!(0.04)),
                            at_or_above: Rate::new(dec!(0.03)),
                        },
                    ),
                    Band::above(5, CarRate::flat(dec!(0.05))),
                ],
            ),
        }
    }

    /// Prices a vehicle
    ///
    /// # Arguments
    ///
    /// * `input` - Registration year and insured value
    /// * `current_year` - Calendar year the quote is made in
    ///
    /// # Returns
    ///
    /// The premium with the vehicle age and rate that produced it. A
    /// registration year in the future gives a negative age, which prices
    /// in the newest-vehicle band.
    pub fn price(&self, input: &CarPremiumInput, current_year: i32) -> CarPremiumResult {
        let vehicle_age = input.vehicle_age(current_year);
        let rate = self.vehicle_age_rates.lookup(vehicle_age).rate_for(&input.insured_value);

        CarPremiumResult {
            vehicle_age,
            rate,
            premium: rate.apply(&input.insured_value),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), PricingError> {
        self.vehicle_age_rates.validate("car.vehicle_age_rates")?;
        if self.vehicle_age_rates.values().any(CarRate::has_negative_rate) {
            return Err(PricingError::invalid_tariff(
                "car.vehicle_age_rates has a negative rate",
            ));
        }
        Ok(())
    }
}

impl Default for CarRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Inputs to the car premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPremiumInput {
    /// Year of first registration; missing means brand new
    #[serde(default)]
    pub registration_year: Option<i32>,
    pub insured_value: Money,
}

impl CarPremiumInput {
    pub fn new(registration_year: i32, insured_value: Money) -> Self {
        Self {
            registration_year: Some(registration_year),
            insured_value,
        }
    }

    /// Vehicle age in whole years as of `current_year`, saturating at the
    /// `i32` bounds
    pub fn vehicle_age(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.registration_year.unwrap_or(current_year))
    }
}

/// Car premium for one year of cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPremiumResult {
    pub vehicle_age: i32,
    pub rate: Rate,
    pub premium: Money,
}

/// Prices a vehicle against the standard tariff
pub fn compute_car_premium(input: &CarPremiumInput, current_year: i32) -> CarPremiumResult {
    CarRules::standard().price(input, current_year)
}
