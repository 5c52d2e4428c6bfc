//! Pre-built Test Fixtures
//!
//! Reference inputs whose premiums are known, plus fixed dates so tests
//! never depend on the clock.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::Money;
use domain_pricing::{
    CarPremiumInput, HealthPremiumInput, LifePremiumInput, Purchase, PurchaseDetails, RiskFlag,
};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

/// Fixture for rupiah amounts used across the pricing tests
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Rp 100,000,000: reference insured value and coverage
    pub fn idr_100m() -> Money {
        Money::idr(dec!(100000000))
    }

    /// Rp 150,000,000: under the car value threshold
    pub fn idr_150m() -> Money {
        Money::idr(dec!(150000000))
    }

    /// Rp 200,000,000: exactly the car value threshold
    pub fn idr_200m() -> Money {
        Money::idr(dec!(200000000))
    }

    /// Rp 250,000,000: over the car value threshold
    pub fn idr_250m() -> Money {
        Money::idr(dec!(250000000))
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// Quote date used throughout the suite (16 Oct 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    pub fn current_year() -> i32 {
        2024
    }

    /// Quote instant matching `today()`
    pub fn quoted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 16, 3, 0, 0).unwrap()
    }

    /// Date of birth giving the requested age on `today()`, birthday already passed
    pub fn born_years_ago(age: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024 - age, 3, 1).unwrap()
    }
}

/// Fixture for pricing inputs
pub struct InputFixtures;

impl InputFixtures {
    /// 25-year-old with no risk factors
    pub fn healthy_adult() -> HealthPremiumInput {
        HealthPremiumInput::new(25, RiskFlag::No, RiskFlag::No, RiskFlag::No)
    }

    /// 45-year-old smoker with hypertension and diabetes
    pub fn high_risk_adult() -> HealthPremiumInput {
        HealthPremiumInput::new(45, RiskFlag::Yes, RiskFlag::Yes, RiskFlag::Yes)
    }

    /// Vehicle registered `age` years before `DateFixtures::current_year()`
    pub fn car_aged(age: i32, insured_value: Money) -> CarPremiumInput {
        CarPremiumInput::new(DateFixtures::current_year() - age, insured_value)
    }

    /// Life applicant of the given age with Rp 100,000,000 coverage
    pub fn life_aged(age: i32) -> LifePremiumInput {
        LifePremiumInput::with_age(age, MoneyFixtures::idr_100m())
    }
}

/// Fixture for checkout records
pub struct PurchaseFixtures;

impl PurchaseFixtures {
    /// A random but well-formed user identifier (an email address)
    pub fn user() -> String {
        SafeEmail().fake()
    }

    /// A random applicant name
    pub fn full_name() -> String {
        Name().fake()
    }

    /// Unpaid life purchase owned by `user`
    pub fn pending_life(user: &str) -> Purchase {
        let coverage = MoneyFixtures::idr_100m();
        Purchase::pending(
            None,
            Some(user.to_string()),
            Money::idr(dec!(2400000)),
            PurchaseDetails::Life {
                full_name: Some(Self::full_name()),
                date_of_birth: None,
                age: 25,
                coverage,
                table: Default::default(),
                monthly_premium: Money::idr(dec!(200000)),
            },
            DateFixtures::quoted_at(),
        )
    }

    /// Unpaid car purchase owned by `user`
    pub fn pending_car(user: &str) -> Purchase {
        Purchase::pending(
            Some("Mobil Premium".to_string()),
            Some(user.to_string()),
            Money::idr(dec!(2500000)),
            PurchaseDetails::Car {
                brand: Some("Honda".to_string()),
                model: Some("Jazz".to_string()),
                registration_year: Some(DateFixtures::current_year()),
                insured_value: MoneyFixtures::idr_100m(),
                plate_number: Some("B 1234 XYZ".to_string()),
                owner_name: Some(Self::full_name()),
            },
            DateFixtures::quoted_at(),
        )
    }
}
