//! Pending purchases and checkout
//!
//! After a quote, the form layer wraps the computed premium into a
//! purchase record that checkout later settles. Storing the record is the
//! caller's business; this module only defines its shape and the one
//! status transition it supports.
//!
//! ```text
//! Unpaid -> Paid
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, PurchaseId};

use crate::error::PricingError;
use crate::health::HealthPremiumBreakdown;
use crate::life::LifeTable;
use crate::risk::RiskFlag;

/// Insurance product lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Health,
    Car,
    Life,
}

impl Product {
    /// Name shown to customers
    pub fn display_name(&self) -> &'static str {
        match self {
            Product::Health => "Asuransi Kesehatan",
            Product::Car => "Asuransi Mobil",
            Product::Life => "Asuransi Jiwa",
        }
    }

    /// Plan name used when the form does not pick one
    pub fn default_plan(&self) -> &'static str {
        match self {
            Product::Health => "Kesehatan",
            Product::Car => "Mobil",
            Product::Life => "Jiwa",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Payment status of a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Unpaid,
    Paid,
}

impl PurchaseStatus {
    /// Status label shown to customers
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseStatus::Unpaid => "Belum Dibayar",
            PurchaseStatus::Paid => "Lunas",
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product-specific data captured with the quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "product", rename_all = "snake_case")]
pub enum PurchaseDetails {
    Health {
        full_name: Option<String>,
        date_of_birth: Option<NaiveDate>,
        /// Age the premium was priced for
        age: i32,
        occupation: Option<String>,
        smoker: RiskFlag,
        hypertensive: RiskFlag,
        diabetic: RiskFlag,
        breakdown: HealthPremiumBreakdown,
    },
    Car {
        brand: Option<String>,
        model: Option<String>,
        registration_year: Option<i32>,
        insured_value: Money,
        plate_number: Option<String>,
        owner_name: Option<String>,
    },
    Life {
        full_name: Option<String>,
        date_of_birth: Option<NaiveDate>,
        age: i32,
        coverage: Money,
        table: LifeTable,
        monthly_premium: Money,
    },
}

impl PurchaseDetails {
    /// Product line the details belong to
    pub fn product(&self) -> Product {
        match self {
            PurchaseDetails::Health { .. } => Product::Health,
            PurchaseDetails::Car { .. } => Product::Car,
            PurchaseDetails::Life { .. } => Product::Life,
        }
    }
}

/// A quoted product awaiting or past payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub product: Product,
    pub plan: String,
    /// Owning user; anonymous quotes carry none
    pub user: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Amount charged at checkout
    pub premium: Money,
    pub status: PurchaseStatus,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    pub details: PurchaseDetails,
}

impl Purchase {
    /// Creates an unpaid purchase
    ///
    /// # Arguments
    ///
    /// * `plan` - Plan name; `None` or blank uses the product's default
    /// * `user` - Owning user identifier
    /// * `premium` - Amount to charge
    /// * `details` - Product-specific payload; decides the product
    /// * `at` - Creation time
    pub fn pending(
        plan: Option<String>,
        user: Option<String>,
        premium: Money,
        details: PurchaseDetails,
        at: DateTime<Utc>,
    ) -> Self {
        let product = details.product();
        let plan = plan
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| product.default_plan().to_string());

        Self {
            id: PurchaseId::new_v7(),
            product,
            plan,
            user,
            created_at: at,
            premium,
            status: PurchaseStatus::Unpaid,
            paid_at: None,
            details,
        }
    }

    /// Checks a record received from outside before it is settled
    ///
    /// # Arguments
    ///
    /// * `expected_premium` - The premium the details price at today
    ///
    /// # Errors
    ///
    /// Returns `InconsistentPurchase` when `product` disagrees with the
    /// details payload or `premium` differs from `expected_premium`
    pub fn verify(&self, expected_premium: Money) -> Result<(), PricingError> {
        let details_product = self.details.product();
        if self.product != details_product {
            return Err(self.inconsistent(format!(
                "product {:?} does not match {:?} details",
                self.product, details_product
            )));
        }
        if self.premium != expected_premium {
            return Err(self.inconsistent(format!(
                "premium {} does not match priced premium {}",
                self.premium, expected_premium
            )));
        }
        Ok(())
    }

    fn inconsistent(&self, reason: String) -> PricingError {
        PricingError::InconsistentPurchase {
            id: self.id.to_string(),
            reason,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == PurchaseStatus::Paid
    }

    /// Settles the purchase
    ///
    /// # Errors
    ///
    /// Returns `InvalidStatusTransition` if the purchase is already paid
    pub fn pay(&mut self, at: DateTime<Utc>) -> Result<(), PricingError> {
        if self.is_paid() {
            return Err(PricingError::transition(self.status, PurchaseStatus::Paid));
        }
        self.status = PurchaseStatus::Paid;
        self.paid_at = Some(at);
        Ok(())
    }
}

/// Settled purchases in the order they were paid
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseHistory {
    entries: Vec<Purchase>,
}

impl PurchaseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a paid purchase
    ///
    /// # Errors
    ///
    /// Returns `UnpaidPurchase` when the purchase has not been settled
    pub fn record(&mut self, purchase: Purchase) -> Result<(), PricingError> {
        if !purchase.is_paid() {
            return Err(PricingError::UnpaidPurchase(purchase.id.to_string()));
        }
        self.entries.push(purchase);
        Ok(())
    }

    /// Purchases owned by `user`, oldest first
    pub fn for_user(&self, user: &str) -> Vec<&Purchase> {
        self.entries
            .iter()
            .filter(|p| p.user.as_deref() == Some(user))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Purchase> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn car_purchase(user: Option<&str>) -> Purchase {
        Purchase::pending(
            None,
            user.map(str::to_string),
            Money::idr(dec!(2500000)),
            PurchaseDetails::Car {
                brand: Some("Toyota".to_string()),
                model: Some("Avanza".to_string()),
                registration_year: Some(2024),
                insured_value: Money::idr(dec!(100000000)),
                plate_number: None,
                owner_name: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_pending_uses_default_plan() {
        let purchase = car_purchase(None);
        assert_eq!(purchase.product, Product::Car);
        assert_eq!(purchase.plan, "Mobil");
        assert_eq!(purchase.status, PurchaseStatus::Unpaid);
    }

    #[test]
    fn test_blank_plan_falls_back() {
        let quoted = car_purchase(None);
        let purchase = Purchase::pending(
            Some("  ".to_string()),
            None,
            quoted.premium,
            quoted.details,
            quoted.created_at,
        );
        assert_eq!(purchase.plan, "Mobil");
    }

    #[test]
    fn test_pay_once() {
        let mut purchase = car_purchase(Some("ani@example.com"));
        purchase.pay(Utc::now()).unwrap();
        assert!(purchase.is_paid());
        assert!(purchase.paid_at.is_some());

        let again = purchase.pay(Utc::now());
        assert!(matches!(again, Err(PricingError::InvalidStatusTransition { .. })));
    }

    #[test]
    fn test_verify_rejects_relabelled_product() {
        let mut purchase = car_purchase(None);
        let premium = purchase.premium;
        assert!(purchase.verify(premium).is_ok());

        purchase.product = Product::Life;
        assert!(matches!(
            purchase.verify(premium),
            Err(PricingError::InconsistentPurchase { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_edited_premium() {
        let mut purchase = car_purchase(None);
        let expected = purchase.premium;
        purchase.premium = Money::idr(dec!(1));
        assert!(matches!(
            purchase.verify(expected),
            Err(PricingError::InconsistentPurchase { .. })
        ));
    }

    #[test]
    fn test_history_rejects_unpaid() {
        let mut history = PurchaseHistory::new();
        assert!(matches!(
            history.record(car_purchase(None)),
            Err(PricingError::UnpaidPurchase(_))
        ));
        assert!(history.is_empty());
    }
}
