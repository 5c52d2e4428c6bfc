//! Identifier for purchase records handed to checkout collaborators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const PURCHASE_PREFIX: &str = "PUR-";

/// Time-ordered purchase identifier, displayed as `PUR-<uuid>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(Uuid);

impl PurchaseId {
    /// Creates a new identifier; later ids sort after earlier ones
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PURCHASE_PREFIX, self.0)
    }
}

impl FromStr for PurchaseId {
    type Err = uuid::Error;

    /// Accepts both `PUR-<uuid>` and a bare uuid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(PURCHASE_PREFIX).unwrap_or(s);
        Uuid::parse_str(raw).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_prefixed() {
        assert!(PurchaseId::new_v7().to_string().starts_with("PUR-"));
    }

    #[test]
    fn test_parse_accepts_prefixed_and_bare_forms() {
        let original = PurchaseId::new_v7();
        let prefixed: PurchaseId = original.to_string().parse().unwrap();
        let bare: PurchaseId = original.0.to_string().parse().unwrap();
        assert_eq!(original, prefixed);
        assert_eq!(original, bare);
        assert!("PUR-not-a-uuid".parse::<PurchaseId>().is_err());
    }
}
