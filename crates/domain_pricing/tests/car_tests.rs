//! Car Premium Tests
//!
//! # Test Organization
//!
//! - `bracket_tests` - Vehicle age brackets and the value sub-bracket
//! - `edge_case_tests` - Future registrations and missing years
//! - `property_tests` - Idempotence and monotonicity in insured value

use core_kernel::Money;
use domain_pricing::{compute_car_premium, CarPremiumInput};
use rust_decimal_macros::dec;
use test_utils::{assert_money_eq, DateFixtures, InputFixtures, MoneyFixtures};

fn price(age: i32, value: Money) -> Money {
    compute_car_premium(&InputFixtures::car_aged(age, value), DateFixtures::current_year()).premium
}

mod bracket_tests {
    use super::*;

    #[test]
    fn test_brand_new_vehicle() {
        assert_money_eq(&price(0, MoneyFixtures::idr_100m()), dec!(2500000));
    }

    /// Age 3 still belongs to the newest bracket
    #[test]
    fn test_three_years_is_newest_bracket() {
        assert_money_eq(&price(3, MoneyFixtures::idr_100m()), dec!(2500000));
        assert_money_eq(&price(3, MoneyFixtures::idr_250m()), dec!(6250000));
    }

    #[test]
    fn test_middle_bracket_under_threshold() {
        assert_money_eq(&price(4, MoneyFixtures::idr_150m()), dec!(6000000));
    }

    #[test]
    fn test_middle_bracket_over_threshold() {
        assert_money_eq(&price(4, MoneyFixtures::idr_250m()), dec!(7500000));
    }

    #[test]
    fn test_middle_bracket_at_threshold() {
        assert_money_eq(&price(4, MoneyFixtures::idr_200m()), dec!(6000000));
    }

    /// Age 5 still uses the value sub-bracket
    #[test]
    fn test_five_years_is_middle_bracket() {
        assert_money_eq(&price(5, MoneyFixtures::idr_150m()), dec!(6000000));
        assert_money_eq(&price(5, MoneyFixtures::idr_250m()), dec!(7500000));
    }

    #[test]
    fn test_older_than_five_ignores_value() {
        assert_money_eq(&price(6, MoneyFixtures::idr_150m()), dec!(7500000));
        assert_money_eq(&price(6, MoneyFixtures::idr_250m()), dec!(12500000));
        assert_money_eq(&price(20, MoneyFixtures::idr_100m()), dec!(5000000));
    }

    #[test]
    fn test_result_reports_age_and_rate() {
        let result = compute_car_premium(
            &InputFixtures::car_aged(4, MoneyFixtures::idr_150m()),
            DateFixtures::current_year(),
        );
        assert_eq!(result.vehicle_age, 4);
        assert_eq!(result.rate.as_decimal(), dec!(0.04));
    }
}

mod edge_case_tests {
    use super::*;

    #[test]
    fn test_future_registration_prices_as_new() {
        let input = CarPremiumInput::new(2027, MoneyFixtures::idr_100m());
        let result = compute_car_premium(&input, 2024);

        assert_eq!(result.vehicle_age, -3);
        assert_money_eq(&result.premium, dec!(2500000));
    }

    #[test]
    fn test_missing_registration_year() {
        let input = CarPremiumInput {
            registration_year: None,
            insured_value: MoneyFixtures::idr_250m(),
        };
        assert_money_eq(&compute_car_premium(&input, 2024).premium, dec!(6250000));
    }

    #[test]
    fn test_extreme_years_saturate() {
        let ancient = CarPremiumInput::new(i32::MIN, MoneyFixtures::idr_100m());
        let result = compute_car_premium(&ancient, i32::MAX);
        assert_eq!(result.vehicle_age, i32::MAX);
        assert_money_eq(&result.premium, dec!(5000000));

        let far_future = CarPremiumInput::new(i32::MAX, MoneyFixtures::idr_100m());
        let result = compute_car_premium(&far_future, i32::MIN);
        assert_eq!(result.vehicle_age, i32::MIN);
        assert_money_eq(&result.premium, dec!(2500000));
    }

    #[test]
    fn test_fractional_value_stays_exact() {
        let value = Money::idr(dec!(123456789.50));
        assert_money_eq(&price(1, value), dec!(3086419.7375));
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::car_input_strategy;

    proptest! {
        #[test]
        fn pricing_is_idempotent(input in car_input_strategy(), year in 2000i32..2040i32) {
            prop_assert_eq!(compute_car_premium(&input, year), compute_car_premium(&input, year));
        }

        #[test]
        fn premium_grows_with_value_within_bracket(
            input in car_input_strategy(),
            extra in 1i64..1_000_000i64,
            year in 2000i32..2040i32
        ) {
            let richer = CarPremiumInput {
                insured_value: Money::idr(input.insured_value.amount() + rust_decimal::Decimal::from(extra)),
                ..input
            };
            let base = compute_car_premium(&input, year);
            let more = compute_car_premium(&richer, year);
            if base.rate == more.rate {
                prop_assert!(more.premium.amount() >= base.premium.amount());
            }
        }

        #[test]
        fn premium_is_rate_times_value(input in car_input_strategy(), year in 2000i32..2040i32) {
            let result = compute_car_premium(&input, year);
            prop_assert_eq!(result.premium.amount(), input.insured_value.amount() * result.rate.as_decimal());
        }
    }
}
