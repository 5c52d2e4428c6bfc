//! Banded lookup tables
//!
//! Every product prices from an age-like key (applicant age, vehicle age)
//! through a table of bands. A band covers `(above, up_to]`: the lower bound
//! is exclusive and the upper bound inclusive, so a key sitting exactly on a
//! boundary belongs to the lower band. Keys matching no band take the
//! table's default value, which is how missing or out-of-range ages end up
//! in the lowest band.

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// A single band `(above, up_to]` mapped to a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band<V> {
    /// Exclusive lower bound
    pub above: i32,
    /// Inclusive upper bound, `None` for an open-ended top band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<i32>,
    /// Value applied inside the band
    pub value: V,
}

impl<V> Band<V> {
    /// Creates a bounded band `(above, up_to]`
    pub fn bounded(above: i32, up_to: i32, value: V) -> Self {
        Self {
            above,
            up_to: Some(up_to),
            value,
        }
    }

    /// Creates an open-ended band `(above, ∞)`
    pub fn above(above: i32, value: V) -> Self {
        Self {
            above,
            up_to: None,
            value,
        }
    }

    /// Returns true if `key` falls inside this band
    pub fn contains(&self, key: i32) -> bool {
        key > self.above && self.up_to.map_or(true, |upper| key <= upper)
    }
}

/// An ordered set of bands plus the value used when no band matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTable<V> {
    /// Value for keys outside every band
    pub default: V,
    /// Bands in ascending order
    pub bands: Vec<Band<V>>,
}

impl<V> BandTable<V> {
    pub fn new(default: V, bands: Vec<Band<V>>) -> Self {
        Self { default, bands }
    }

    /// Looks up the value for `key`
    ///
    /// # Arguments
    ///
    /// * `key` - The banding key (e.g. age in completed years)
    ///
    /// # Returns
    ///
    /// The value of the first band containing `key`, or the default
    pub fn lookup(&self, key: i32) -> &V {
        self.bands
            .iter()
            .find(|band| band.contains(key))
            .map(|band| &band.value)
            .unwrap_or(&self.default)
    }

    /// Checks that the bands are non-empty, well-formed and ascending
    ///
    /// Each band must have `above < up_to`, bands may not overlap, and only
    /// the last band may be open-ended.
    ///
    /// # Arguments
    ///
    /// * `table` - Table name used in error messages
    pub fn validate(&self, table: &str) -> Result<(), PricingError> {
        if self.bands.is_empty() {
            return Err(PricingError::invalid_tariff(format!(
                "{}: band list is empty",
                table
            )));
        }

        let mut previous_upper: Option<i32> = None;
        for (index, band) in self.bands.iter().enumerate() {
            if let Some(upper) = band.up_to {
                if band.above >= upper {
                    return Err(PricingError::invalid_tariff(format!(
                        "{}: band {} has lower bound {} not below upper bound {}",
                        table, index, band.above, upper
                    )));
                }
            } else if index + 1 != self.bands.len() {
                return Err(PricingError::invalid_tariff(format!(
                    "{}: only the last band may be open-ended (band {})",
                    table, index
                )));
            }

            if let Some(previous) = previous_upper {
                if band.above < previous {
                    return Err(PricingError::invalid_tariff(format!(
                        "{}: band {} overlaps the band before it",
                        table, index
                    )));
                }
            }
            previous_upper = band.up_to;
        }

        Ok(())
    }

    /// Iterates over every value in the table, default first
    pub fn values(&self) -> impl Iterator<Item = &V> {
        std::iter::once(&self.default).chain(self.bands.iter().map(|band| &band.value))
    }
}
