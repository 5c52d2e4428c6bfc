//! Premium calculator service
//!
//! Wraps a [`Tariff`] so that collaborators price against whichever tariff
//! was configured at startup. The service holds no mutable state; clones
//! share the same tariff.

use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use tracing::debug;

use core_kernel::Money;

use crate::car::{CarPremiumInput, CarPremiumResult};
use crate::health::{HealthPremiumBreakdown, HealthPremiumInput};
use crate::life::{LifePremiumInput, LifePremiumResult, LifeTable};
use crate::purchase::PurchaseDetails;
use crate::tariff::Tariff;

/// Prices all three products against one tariff
#[derive(Debug, Clone)]
pub struct PremiumCalculator {
    tariff: Arc<Tariff>,
}

impl PremiumCalculator {
    /// Creates a calculator for the given tariff
    pub fn new(tariff: Tariff) -> Self {
        Self {
            tariff: Arc::new(tariff),
        }
    }

    /// Creates a calculator for the published tariff
    pub fn standard() -> Self {
        Self::new(Tariff::standard())
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Prices a health application
    pub fn health(&self, input: &HealthPremiumInput) -> HealthPremiumBreakdown {
        let breakdown = self.tariff.health.price(input);
        debug!(
            tariff = %self.tariff.name,
            age = input.age,
            smoker = %input.smoker,
            hypertensive = %input.hypertensive,
            diabetic = %input.diabetic,
            total = %breakdown.total,
            "Priced health premium"
        );
        breakdown
    }

    /// Prices a vehicle
    ///
    /// # Arguments
    ///
    /// * `input` - Registration year and insured value
    /// * `current_year` - Calendar year of the quote
    pub fn car(&self, input: &CarPremiumInput, current_year: i32) -> CarPremiumResult {
        let result = self.tariff.car.price(input, current_year);
        debug!(
            tariff = %self.tariff.name,
            vehicle_age = result.vehicle_age,
            insured_value = %input.insured_value,
            rate = %result.rate,
            premium = %result.premium,
            "Priced car premium"
        );
        result
    }

    /// Prices a life application against the named table
    ///
    /// # Arguments
    ///
    /// * `table` - Which flow's rate table applies
    /// * `input` - Age or date of birth, and coverage
    /// * `today` - Date used to derive age from a date of birth
    pub fn life(
        &self,
        table: LifeTable,
        input: &LifePremiumInput,
        today: NaiveDate,
    ) -> LifePremiumResult {
        let result = self.tariff.life(table).price(input, today);
        debug!(
            tariff = %self.tariff.name,
            table = %table,
            age = result.age,
            rate = %result.rate,
            coverage = %input.coverage,
            monthly = %result.monthly_premium,
            annual = %result.annual_premium,
            "Priced life premium"
        );
        result
    }
}

impl PremiumCalculator {
    /// Prices a purchase's details again, as quoted on `quoted_on`
    ///
    /// # Arguments
    ///
    /// * `details` - Product payload captured with the quote
    /// * `quoted_on` - Local date of the quote; its year ages the vehicle
    ///
    /// # Returns
    ///
    /// The amount a purchase with these details is charged
    pub fn reprice(&self, details: &PurchaseDetails, quoted_on: NaiveDate) -> Money {
        match details {
            PurchaseDetails::Health {
                age,
                smoker,
                hypertensive,
                diabetic,
                ..
            } => {
                let input = HealthPremiumInput::new(*age, *smoker, *hypertensive, *diabetic);
                self.health(&input).total
            }
            PurchaseDetails::Car {
                registration_year,
                insured_value,
                ..
            } => {
                let input = CarPremiumInput {
                    registration_year: *registration_year,
                    insured_value: *insured_value,
                };
                self.car(&input, quoted_on.year()).premium
            }
            PurchaseDetails::Life {
                age,
                coverage,
                table,
                ..
            } => {
                let input = LifePremiumInput::with_age(*age, *coverage);
                self.life(*table, &input, quoted_on).charged_premium()
            }
        }
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::standard()
    }
}
