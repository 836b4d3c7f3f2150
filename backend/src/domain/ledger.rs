//! Payment ledger calculations.
//!
//! Pure money math over a payment record: the discounted total at
//! checkout, and the balance/paid-state updates as payments arrive.
//! Amounts are plain `f64` rounded to two decimals at each derivation
//! point; formatting for display never touches the stored values.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::models::payment::{LineItem, PaymentRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The payment amount is not a finite, non-negative number.
    #[error("payment amount must be a finite, non-negative number")]
    InvalidAmount,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the discounted total for a set of line items.
///
/// Non-finite unit prices count as zero, matching how the checkout form
/// treats a blank price field. The discount is NOT clamped here: a
/// discount above 100 yields a negative total. Bounding the discount is
/// the caller's job; the service validates the range before building a
/// record.
pub fn compute_total(line_items: &[LineItem], discount_percent: f64) -> f64 {
    if line_items.is_empty() {
        return 0.0;
    }
    let cost: f64 = line_items
        .iter()
        .map(|item| {
            let price = if item.price.is_finite() { item.price } else { 0.0 };
            price * item.quantity as f64
        })
        .sum();
    let discount = if discount_percent.is_finite() {
        discount_percent
    } else {
        0.0
    };
    round2(cost - (cost * discount) / 100.0)
}

/// Recompute the derived balance fields from `total_cost` and
/// `amount_paid`. The remaining balance is floored at zero and the
/// fully-paid flag flips once it reaches zero.
pub fn recompute_balance(record: &mut PaymentRecord) {
    let remaining = round2(record.total_cost - record.amount_paid);
    if remaining <= 0.0 {
        record.remaining_balance = 0.0;
        record.is_fully_paid = true;
    } else {
        record.remaining_balance = remaining;
        record.is_fully_paid = false;
    }
}

/// Apply a payment to a record: accumulate `amount_paid`, rederive the
/// balance fields, and stamp the payment date. Rejects amounts that are
/// not finite non-negative numbers; the record is untouched on error.
pub fn apply_payment(
    record: &mut PaymentRecord,
    amount: f64,
    date: DateTime<Utc>,
) -> Result<(), LedgerError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(LedgerError::InvalidAmount);
    }
    record.amount_paid = round2(record.amount_paid + amount);
    record.timestamp = date;
    recompute_balance(record);
    Ok(())
}

/// Insert thousands separators into a 2-decimal rendering of an amount,
/// e.g. 1234567.5 → "1,234,567.50". Display-only.
pub fn format_thousands(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    let (sign, rest) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, ""));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}
