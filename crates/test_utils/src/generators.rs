//! Property-Based Test Generators
//!
//! Provides proptest strategies for pricing inputs.

use core_kernel::Money;
use domain_pricing::{CarPremiumInput, HealthPremiumInput, LifePremiumInput, LifeTable, RiskFlag};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for risk answers
pub fn risk_flag_strategy() -> impl Strategy<Value = RiskFlag> {
    prop_oneof![Just(RiskFlag::Yes), Just(RiskFlag::No)]
}

/// Strategy for applicant ages, including the out-of-range values the form
/// layer may pass through (negative, very old)
pub fn age_strategy() -> impl Strategy<Value = i32> {
    -5i32..120i32
}

/// Strategy for whole-rupiah amounts up to Rp 10 billion
pub fn rupiah_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000_000i64).prop_map(|amount| Money::idr(Decimal::from(amount)))
}

/// Strategy for positive whole-rupiah amounts
pub fn positive_rupiah_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000_000i64).prop_map(|amount| Money::idr(Decimal::from(amount)))
}

/// Strategy for health inputs over every flag combination
pub fn health_input_strategy() -> impl Strategy<Value = HealthPremiumInput> {
    (
        age_strategy(),
        risk_flag_strategy(),
        risk_flag_strategy(),
        risk_flag_strategy(),
    )
        .prop_map(|(age, smoker, hypertensive, diabetic)| {
            HealthPremiumInput::new(age, smoker, hypertensive, diabetic)
        })
}

/// Strategy for car inputs registered between 1990 and 2030
pub fn car_input_strategy() -> impl Strategy<Value = CarPremiumInput> {
    (1990i32..2031i32, positive_rupiah_strategy())
        .prop_map(|(year, value)| CarPremiumInput::new(year, value))
}

/// Strategy for life inputs with an explicit age
pub fn life_input_strategy() -> impl Strategy<Value = LifePremiumInput> {
    (age_strategy(), rupiah_strategy())
        .prop_map(|(age, coverage)| LifePremiumInput::with_age(age, coverage))
}

/// Strategy for life table selection
pub fn life_table_strategy() -> impl Strategy<Value = LifeTable> {
    prop_oneof![Just(LifeTable::Comparison), Just(LifeTable::Application)]
}
