//! Calendar helpers for pricing inputs
//!
//! Pricing never reads the clock itself. Callers resolve "today" in the
//! jurisdiction's timezone once and pass the date in, which keeps every
//! premium a pure function of its inputs.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for the selling jurisdiction
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Calendar date of a UTC instant in this timezone
    pub fn local_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        utc.with_timezone(&self.0).date_naive()
    }

    /// Calendar year of a UTC instant in this timezone
    pub fn local_year(&self, utc: DateTime<Utc>) -> i32 {
        self.local_date(utc).year()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Jakarta)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| TemporalError::InvalidDate(value.to_string()))
}

/// Age in completed years on `on` for someone born on `date_of_birth`.
///
/// Year difference, minus one when the birthday has not yet come round in
/// the year of `on`. A birth date after `on` yields a negative age.
pub fn completed_years(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completed_years_on_birthday() {
        assert_eq!(completed_years(date(1990, 6, 15), date(2024, 6, 15)), 34);
    }

    #[test]
    fn test_completed_years_day_before_birthday() {
        assert_eq!(completed_years(date(1990, 6, 15), date(2024, 6, 14)), 33);
    }

    #[test]
    fn test_local_date_crosses_midnight_in_jakarta() {
        // 18:30 UTC is already the next day in UTC+7
        let utc = Utc.with_ymd_and_hms(2024, 12, 31, 18, 30, 0).unwrap();
        let tz = Timezone::default();

        assert_eq!(tz.local_date(utc), date(2025, 1, 1));
        assert_eq!(tz.local_year(utc), 2025);
    }
}
