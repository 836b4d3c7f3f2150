//! Domain model for a payment record and its line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One treatment entry within a payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Unit price agreed at checkout
    pub price: f64,
    pub quantity: u32,
}

/// Paid-state of a record, derived from its money fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    Unpaid,
    PartiallyPaid,
    FullyPaid,
}

/// A payment record created once at checkout. Later partial payments
/// accumulate into `amount_paid`; the derived fields are recomputed by
/// the ledger. Records are never deleted in normal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    /// Patient referenced by name
    pub patient: String,
    pub treatments: Vec<LineItem>,
    /// Discount percentage applied to the line-item sum
    pub discount: f64,
    /// Derived: discounted line-item sum, rounded to 2 decimals
    pub total_cost: f64,
    /// Cumulative amount received
    pub amount_paid: f64,
    /// Derived: total cost minus amount paid, floored at zero
    pub remaining_balance: f64,
    /// Derived: true once the remaining balance reaches zero
    pub is_fully_paid: bool,
    /// Creation / last payment timestamp
    pub timestamp: DateTime<Utc>,
}

impl PaymentRecord {
    /// Generate a unique payment document id.
    /// Format: `payment::<uuid>`
    pub fn generate_id() -> String {
        format!("payment::{}", Uuid::new_v4())
    }

    /// The record's paid-state. FullyPaid is terminal: the ledger refuses
    /// further payments and no refund/void path exists.
    pub fn state(&self) -> PaymentState {
        if self.is_fully_paid {
            PaymentState::FullyPaid
        } else if self.amount_paid > 0.0 {
            PaymentState::PartiallyPaid
        } else {
            PaymentState::Unpaid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(total: f64, paid: f64, fully_paid: bool) -> PaymentRecord {
        PaymentRecord {
            id: PaymentRecord::generate_id(),
            patient: "Test Patient".to_string(),
            treatments: vec![],
            discount: 0.0,
            total_cost: total,
            amount_paid: paid,
            remaining_balance: (total - paid).max(0.0),
            is_fully_paid: fully_paid,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_state_derivation() {
        assert_eq!(record(100.0, 0.0, false).state(), PaymentState::Unpaid);
        assert_eq!(record(100.0, 40.0, false).state(), PaymentState::PartiallyPaid);
        assert_eq!(record(100.0, 100.0, true).state(), PaymentState::FullyPaid);
    }
}
