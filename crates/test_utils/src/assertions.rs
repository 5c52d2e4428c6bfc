//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for pricing results that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_pricing::{HealthPremiumBreakdown, LifePremiumResult, RateBasis};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that a Money value has exactly the given amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected {} {}, got {}",
        actual.currency().symbol(),
        expected,
        actual
    );
}

/// Asserts that money values sum to a total
///
/// # Arguments
///
/// * `parts` - The money values that should sum to total
/// * `total` - The expected total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts that a health breakdown's total is the sum of its five parts
pub fn assert_breakdown_consistent(breakdown: &HealthPremiumBreakdown) {
    assert_money_sum_equals(
        &[
            breakdown.base,
            breakdown.age_factor,
            breakdown.smoke_surcharge,
            breakdown.hyper_surcharge,
            breakdown.diabetes_surcharge,
        ],
        &breakdown.total,
    );
}

/// Asserts that monthly and annual premiums agree with the table's basis
///
/// On a monthly basis the annual figure is exactly twelve months. On an
/// annual basis the monthly figure is rounded to four places, so the check
/// allows that rounding.
pub fn assert_life_periods_consistent(result: &LifePremiumResult) {
    let twelve_months = result.monthly_premium.amount() * dec!(12);
    match result.rate_basis {
        RateBasis::Monthly => assert_eq!(
            twelve_months,
            result.annual_premium.amount(),
            "Monthly premium {} × 12 should equal annual premium {}",
            result.monthly_premium,
            result.annual_premium
        ),
        RateBasis::Annual => {
            let diff = (twelve_months - result.annual_premium.amount()).abs();
            assert!(
                diff <= dec!(0.0006),
                "Monthly premium {} × 12 drifts from annual premium {} by {}",
                result.monthly_premium,
                result.annual_premium,
                diff
            );
        }
    }
}
