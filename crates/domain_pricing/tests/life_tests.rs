//! Life Premium Tests
//!
//! # Test Organization
//!
//! - `comparison_table_tests` - Quote-comparison rates, monthly basis
//! - `application_table_tests` - Application-form rates, yearly basis
//! - `age_resolution_tests` - Explicit age vs. date of birth
//! - `property_tests` - Period consistency, idempotence and monotonicity

use domain_pricing::{
    compute_life_premium, LifePremiumInput, LifeRules, LifeTable, PremiumCalculator, RateBasis,
};
use rust_decimal_macros::dec;
use test_utils::{assert_life_periods_consistent, assert_money_eq, DateFixtures, InputFixtures};

mod comparison_table_tests {
    use super::*;

    #[test]
    fn test_young_applicant() {
        let result = compute_life_premium(&InputFixtures::life_aged(25), DateFixtures::today());

        assert_money_eq(&result.monthly_premium, dec!(200000));
        assert_money_eq(&result.annual_premium, dec!(2400000));
        assert_eq!(result.rate_basis, RateBasis::Monthly);
    }

    #[test]
    fn test_middle_band() {
        let result = compute_life_premium(&InputFixtures::life_aged(40), DateFixtures::today());

        assert_money_eq(&result.monthly_premium, dec!(400000));
        assert_money_eq(&result.annual_premium, dec!(4800000));
    }

    #[test]
    fn test_over_fifty() {
        let result = compute_life_premium(&InputFixtures::life_aged(60), DateFixtures::today());

        assert_money_eq(&result.monthly_premium, dec!(1000000));
        assert_money_eq(&result.annual_premium, dec!(12000000));
    }

    #[test]
    fn test_band_boundaries() {
        let rules = LifeRules::comparison();
        assert_eq!(rules.rate_for_age(30).as_decimal(), dec!(0.002));
        assert_eq!(rules.rate_for_age(31).as_decimal(), dec!(0.004));
        assert_eq!(rules.rate_for_age(50).as_decimal(), dec!(0.004));
        assert_eq!(rules.rate_for_age(51).as_decimal(), dec!(0.01));
    }

    #[test]
    fn test_zero_coverage_is_free() {
        let input = LifePremiumInput::with_age(40, core_kernel::Money::idr(dec!(0)));
        let result = compute_life_premium(&input, DateFixtures::today());

        assert!(result.monthly_premium.is_zero());
        assert!(result.annual_premium.is_zero());
    }
}

mod application_table_tests {
    use super::*;

    #[test]
    fn test_tables_disagree_between_thirty_and_thirty_five() {
        let calculator = PremiumCalculator::standard();
        let input = InputFixtures::life_aged(33);

        let comparison = calculator.life(LifeTable::Comparison, &input, DateFixtures::today());
        let application = calculator.life(LifeTable::Application, &input, DateFixtures::today());

        assert_eq!(comparison.rate.as_decimal(), dec!(0.004));
        assert_eq!(application.rate.as_decimal(), dec!(0.002));
    }

    #[test]
    fn test_application_rate_is_yearly() {
        let result = LifeRules::application().price(&InputFixtures::life_aged(33), DateFixtures::today());

        assert_eq!(result.rate_basis, RateBasis::Annual);
        assert_money_eq(&result.annual_premium, dec!(200000));
        assert_money_eq(&result.monthly_premium, dec!(16666.6667));
        assert_life_periods_consistent(&result);
    }

    #[test]
    fn test_application_band_boundaries() {
        let rules = LifeRules::application();
        assert_eq!(rules.rate_for_age(35).as_decimal(), dec!(0.002));
        assert_eq!(rules.rate_for_age(36).as_decimal(), dec!(0.004));
        assert_eq!(rules.rate_for_age(50).as_decimal(), dec!(0.004));
        assert_eq!(rules.rate_for_age(51).as_decimal(), dec!(0.01));
    }
}

mod age_resolution_tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_date_of_birth_drives_band() {
        let input = LifePremiumInput::with_date_of_birth(
            DateFixtures::born_years_ago(45),
            test_utils::MoneyFixtures::idr_100m(),
        );
        let result = compute_life_premium(&input, DateFixtures::today());

        assert_eq!(result.age, 45);
        assert_money_eq(&result.monthly_premium, dec!(400000));
    }

    #[test]
    fn test_birthday_tomorrow_keeps_lower_band() {
        // Turns 51 on 17 Oct 2024
        let dob = NaiveDate::from_ymd_opt(1973, 10, 17).unwrap();
        let input = LifePremiumInput::with_date_of_birth(dob, test_utils::MoneyFixtures::idr_100m());
        let result = compute_life_premium(&input, DateFixtures::today());

        assert_eq!(result.age, 50);
        assert_eq!(result.rate.as_decimal(), dec!(0.004));
    }

    #[test]
    fn test_missing_age_prices_lowest_band() {
        let input = LifePremiumInput {
            age: None,
            date_of_birth: None,
            coverage: test_utils::MoneyFixtures::idr_100m(),
        };
        let result = compute_life_premium(&input, DateFixtures::today());

        assert_eq!(result.age, 0);
        assert_money_eq(&result.monthly_premium, dec!(200000));
    }
}

mod property_tests {
    use super::*;
    use core_kernel::Money;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use test_utils::{life_input_strategy, life_table_strategy};

    proptest! {
        #[test]
        fn periods_agree_with_basis(input in life_input_strategy(), table in life_table_strategy()) {
            let result = PremiumCalculator::standard().life(table, &input, DateFixtures::today());
            assert_life_periods_consistent(&result);
        }

        #[test]
        fn pricing_is_idempotent(input in life_input_strategy()) {
            let today = DateFixtures::today();
            prop_assert_eq!(compute_life_premium(&input, today), compute_life_premium(&input, today));
        }

        #[test]
        fn premium_never_decreases_with_age(input in life_input_strategy(), table in life_table_strategy()) {
            let calculator = PremiumCalculator::standard();
            let today = DateFixtures::today();
            let age = input.age.unwrap_or(0);
            let older = LifePremiumInput::with_age(age + 1, input.coverage);

            prop_assert!(
                calculator.life(table, &older, today).annual_premium.amount()
                    >= calculator.life(table, &input, today).annual_premium.amount()
            );
        }

        #[test]
        fn premium_never_decreases_with_coverage(
            input in life_input_strategy(),
            table in life_table_strategy(),
            extra in 1i64..1_000_000_000i64,
        ) {
            let calculator = PremiumCalculator::standard();
            let today = DateFixtures::today();
            let larger = LifePremiumInput::with_age(
                input.age.unwrap_or(0),
                input.coverage + Money::idr(Decimal::from(extra)),
            );

            let base = calculator.life(table, &input, today);
            let raised = calculator.life(table, &larger, today);
            prop_assert_eq!(base.rate, raised.rate);
            prop_assert!(raised.monthly_premium.amount() >= base.monthly_premium.amount());
            prop_assert!(raised.annual_premium.amount() >= base.annual_premium.amount());
        }
    }
}
