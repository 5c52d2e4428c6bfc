//! Tests for the calendar helpers
//!
//! Covers completed-years age calculation, ISO date parsing and
//! jurisdiction timezone handling.

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::temporal::TemporalError;
use core_kernel::{completed_years, parse_iso_date, Timezone};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod completed_years_tests {
    use super::*;

    #[test]
    fn test_birthday_already_passed() {
        assert_eq!(completed_years(date(1985, 3, 1), date(2024, 10, 16)), 39);
    }

    #[test]
    fn test_birthday_later_this_month() {
        assert_eq!(completed_years(date(1985, 10, 20), date(2024, 10, 16)), 38);
    }

    #[test]
    fn test_birthday_in_a_later_month() {
        assert_eq!(completed_years(date(1985, 12, 1), date(2024, 10, 16)), 38);
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        // Feb 28 precedes Feb 29, so the birthday has not come round yet
        assert_eq!(completed_years(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(completed_years(date(2000, 2, 29), date(2023, 3, 1)), 23);
    }

    #[test]
    fn test_born_today_is_zero() {
        assert_eq!(completed_years(date(2024, 10, 16), date(2024, 10, 16)), 0);
    }

    #[test]
    fn test_future_birth_date_is_negative() {
        assert_eq!(completed_years(date(2026, 1, 1), date(2024, 10, 16)), -2);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("1990-06-15").unwrap(), date(1990, 6, 15));
        assert_eq!(parse_iso_date(" 1990-06-15 ").unwrap(), date(1990, 6, 15));
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(
            parse_iso_date("15/06/1990"),
            Err(TemporalError::InvalidDate("15/06/1990".to_string()))
        );
        assert!(parse_iso_date("").is_err());
        assert!(parse_iso_date("1990-02-30").is_err());
    }
}

mod timezone {
    use super::*;

    #[test]
    fn test_default_is_jakarta() {
        assert_eq!(Timezone::default().0, chrono_tz::Asia::Jakarta);
    }

    #[test]
    fn test_parse_timezone_name() {
        let tz: Timezone = "Asia/Makassar".parse().unwrap();
        assert_eq!(tz.0, chrono_tz::Asia::Makassar);
        assert!(matches!(
            "Mars/Olympus".parse::<Timezone>(),
            Err(TemporalError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_local_date_before_local_midnight() {
        let utc = Utc.with_ymd_and_hms(2024, 6, 15, 16, 59, 59).unwrap();
        assert_eq!(Timezone::default().local_date(utc), date(2024, 6, 15));
    }

    #[test]
    fn test_serde_roundtrip() {
        let tz = Timezone::default();
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Asia/Jakarta\"");
        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }
}
