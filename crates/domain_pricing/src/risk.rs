//! Binary risk indicators
//!
//! Quote forms submit risk answers as free text ("Ya" / "Tidak"). Pricing
//! only ever asks one question of them, so they are closed into a two-value
//! type at the edge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form value that marks a risk as present
pub const YES_FORM_VALUE: &str = "Ya";

/// Alternative "yes" answer accepted on the smoker question only
pub const SMOKER_FORM_VALUE: &str = "Merokok";

/// A yes/no risk answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFlag {
    Yes,
    #[default]
    No,
}

impl RiskFlag {
    /// Reads a form answer; only the exact value `"Ya"` counts as yes
    pub fn from_form_value(value: &str) -> Self {
        if value == YES_FORM_VALUE {
            RiskFlag::Yes
        } else {
            RiskFlag::No
        }
    }

    /// Reads the smoker answer, which also accepts `"Merokok"`
    pub fn from_smoker_form_value(value: &str) -> Self {
        if value == SMOKER_FORM_VALUE {
            RiskFlag::Yes
        } else {
            Self::from_form_value(value)
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, RiskFlag::Yes)
    }

    /// The 0/1 indicator multiplied into a surcharge
    pub fn indicator(&self) -> Decimal {
        if self.is_yes() {
            Decimal::ONE
        } else {
            Decimal::ZERO
        }
    }
}

impl From<bool> for RiskFlag {
    fn from(value: bool) -> Self {
        if value {
            RiskFlag::Yes
        } else {
            RiskFlag::No
        }
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFlag::Yes => write!(f, "Ya"),
            RiskFlag::No => write!(f, "Tidak"),
        }
    }
}
