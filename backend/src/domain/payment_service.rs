use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::payments::{
    CheckoutCommand, CheckoutResult, MarkFullyPaidResult, PaymentHistoryQuery,
    PaymentHistoryResult, PaymentListResult, RecordPaymentCommand, RecordPaymentResult,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::ledger;
use crate::domain::models::payment::PaymentRecord;
use crate::storage::json::{JsonConnection, PaymentRepository};
use crate::storage::traits::PaymentStorage;

/// Service for payment records: checkout, partial payments, and history.
#[derive(Clone)]
pub struct PaymentService {
    payment_repository: PaymentRepository,
}

impl PaymentService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let payment_repository = PaymentRepository::new(connection);
        Self { payment_repository }
    }

    /// Create a payment record at checkout. Creation and the first payment
    /// are combined: the submitted `amount_paid` is applied immediately and
    /// may be zero.
    pub fn checkout(&self, command: CheckoutCommand) -> DomainResult<CheckoutResult> {
        info!(
            "Checkout: patient={}, {} line items, discount={}%",
            command.patient,
            command.line_items.len(),
            command.discount_percent
        );

        self.validate_checkout(&command)?;

        let total_cost = ledger::compute_total(&command.line_items, command.discount_percent);
        let mut payment = PaymentRecord {
            id: PaymentRecord::generate_id(),
            patient: command.patient.trim().to_string(),
            treatments: command.line_items,
            discount: command.discount_percent,
            total_cost,
            amount_paid: 0.0,
            remaining_balance: 0.0,
            is_fully_paid: false,
            timestamp: Utc::now(),
        };
        ledger::apply_payment(&mut payment, command.amount_paid, Utc::now())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.payment_repository.store_payment(&payment)?;

        info!(
            "Created payment record {} (total={}, paid={}, balance={})",
            payment.id, payment.total_cost, payment.amount_paid, payment.remaining_balance
        );

        Ok(CheckoutResult { payment })
    }

    /// Record a partial payment against an existing record. Fully paid is
    /// terminal: further payments are rejected; there is no refund path.
    pub fn record_payment(&self, command: RecordPaymentCommand) -> DomainResult<RecordPaymentResult> {
        info!(
            "Recording payment of {} against {}",
            command.amount, command.payment_id
        );

        let mut payment = self
            .payment_repository
            .get_payment(&command.payment_id)?
            .ok_or_else(|| DomainError::not_found("Payment", &command.payment_id))?;

        if payment.is_fully_paid {
            return Err(DomainError::validation(
                "Payment record is already fully paid",
            ));
        }

        let date = match command.date.as_deref() {
            Some(date) => parse_payment_date(date)?,
            None => Utc::now(),
        };

        ledger::apply_payment(&mut payment, command.amount, date)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.payment_repository.update_payment(&payment)?;

        info!(
            "Payment {} now paid={} balance={} fully_paid={}",
            payment.id, payment.amount_paid, payment.remaining_balance, payment.is_fully_paid
        );

        Ok(RecordPaymentResult { payment })
    }

    /// Front-desk override: flag a record as fully paid without touching
    /// the money fields. The flag alone makes the record terminal.
    pub fn mark_fully_paid(&self, payment_id: &str) -> DomainResult<MarkFullyPaidResult> {
        info!("Marking payment as fully paid: {}", payment_id);

        let mut payment = self
            .payment_repository
            .get_payment(payment_id)?
            .ok_or_else(|| DomainError::not_found("Payment", payment_id))?;

        payment.is_fully_paid = true;
        self.payment_repository.update_payment(&payment)?;

        Ok(MarkFullyPaidResult { payment })
    }

    /// All payment records, most recent first, for the payment screen's
    /// table.
    pub fn list_payments(&self) -> DomainResult<PaymentListResult> {
        let mut payments = self.payment_repository.list_payments()?;
        payments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        info!("Listing {} payment records", payments.len());

        Ok(PaymentListResult { payments })
    }

    /// A patient's payment history, matched by exact patient name.
    pub fn payment_history(&self, query: PaymentHistoryQuery) -> DomainResult<PaymentHistoryResult> {
        let payments = self.payment_repository.payments_for_patient(&query.patient)?;

        info!(
            "Found {} payment records for patient {}",
            payments.len(),
            query.patient
        );

        Ok(PaymentHistoryResult { payments })
    }

    fn validate_checkout(&self, command: &CheckoutCommand) -> DomainResult<()> {
        if command.patient.trim().is_empty() {
            return Err(DomainError::validation("Please select a patient"));
        }
        if command.line_items.is_empty() {
            return Err(DomainError::validation(
                "Please select at least one treatment",
            ));
        }
        for item in &command.line_items {
            if item.name.trim().is_empty() {
                return Err(DomainError::validation("Treatment name cannot be empty"));
            }
            if item.quantity < 1 {
                return Err(DomainError::validation("Quantity must be at least 1"));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(DomainError::validation(
                    "Price must be a non-negative number",
                ));
            }
        }
        if !command.discount_percent.is_finite()
            || command.discount_percent < 0.0
            || command.discount_percent > 100.0
        {
            return Err(DomainError::validation(
                "Discount must be between 0 and 100",
            ));
        }
        if !command.amount_paid.is_finite() || command.amount_paid < 0.0 {
            return Err(DomainError::validation(
                "Amount paid must be a non-negative number",
            ));
        }
        Ok(())
    }
}

fn parse_payment_date(date: &str) -> DomainResult<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::validation("Invalid payment date format. Use YYYY-MM-DD."))?;
    // Midnight UTC; payment dates are day-level in the front office
    Ok(DateTime::from_naive_utc_and_offset(
        day.and_time(NaiveTime::MIN),
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::payment::{LineItem, PaymentState};
    use tempfile::tempdir;

    fn setup_test() -> (PaymentService, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (PaymentService::new(Arc::new(connection)), temp_dir)
    }

    fn item(price: f64, quantity: u32) -> LineItem {
        LineItem {
            name: "Cleaning".to_string(),
            price,
            quantity,
        }
    }

    fn checkout_command(amount_paid: f64) -> CheckoutCommand {
        CheckoutCommand {
            patient: "Maria Santos".to_string(),
            line_items: vec![item(100.0, 2)],
            discount_percent: 10.0,
            amount_paid,
        }
    }

    #[test]
    fn test_checkout_with_initial_payment() {
        let (service, _dir) = setup_test();
        let result = service.checkout(checkout_command(50.0)).unwrap();

        assert_eq!(result.payment.total_cost, 180.0);
        assert_eq!(result.payment.amount_paid, 50.0);
        assert_eq!(result.payment.remaining_balance, 130.0);
        assert!(!result.payment.is_fully_paid);
        assert_eq!(result.payment.state(), PaymentState::PartiallyPaid);
    }

    #[test]
    fn test_checkout_without_initial_payment_is_unpaid() {
        let (service, _dir) = setup_test();
        let result = service.checkout(checkout_command(0.0)).unwrap();

        assert_eq!(result.payment.remaining_balance, 180.0);
        assert_eq!(result.payment.state(), PaymentState::Unpaid);
    }

    #[test]
    fn test_checkout_paid_in_full() {
        let (service, _dir) = setup_test();
        let result = service.checkout(checkout_command(180.0)).unwrap();

        assert_eq!(result.payment.remaining_balance, 0.0);
        assert!(result.payment.is_fully_paid);
    }

    #[test]
    fn test_checkout_validation() {
        let (service, _dir) = setup_test();

        let mut no_patient = checkout_command(0.0);
        no_patient.patient = " ".to_string();
        assert!(matches!(
            service.checkout(no_patient),
            Err(DomainError::Validation(_))
        ));

        let mut no_items = checkout_command(0.0);
        no_items.line_items.clear();
        assert!(service.checkout(no_items).is_err());

        let mut zero_quantity = checkout_command(0.0);
        zero_quantity.line_items = vec![item(100.0, 0)];
        assert!(service.checkout(zero_quantity).is_err());

        let mut discount_out_of_range = checkout_command(0.0);
        discount_out_of_range.discount_percent = 150.0;
        assert!(service.checkout(discount_out_of_range).is_err());

        let mut negative_payment = checkout_command(-5.0);
        negative_payment.amount_paid = -5.0;
        assert!(service.checkout(negative_payment).is_err());
    }

    #[test]
    fn test_record_payment_accumulates_until_fully_paid() {
        let (service, _dir) = setup_test();
        let payment = service.checkout(checkout_command(50.0)).unwrap().payment;

        let partial = service
            .record_payment(RecordPaymentCommand {
                payment_id: payment.id.clone(),
                amount: 30.0,
                date: Some("2025-06-11".to_string()),
            })
            .unwrap();
        assert_eq!(partial.payment.amount_paid, 80.0);
        assert_eq!(partial.payment.remaining_balance, 100.0);
        assert!(!partial.payment.is_fully_paid);

        let settled = service
            .record_payment(RecordPaymentCommand {
                payment_id: payment.id.clone(),
                amount: 100.0,
                date: None,
            })
            .unwrap();
        assert_eq!(settled.payment.remaining_balance, 0.0);
        assert!(settled.payment.is_fully_paid);

        // Fully paid is terminal
        let rejected = service.record_payment(RecordPaymentCommand {
            payment_id: payment.id,
            amount: 10.0,
            date: None,
        });
        assert!(matches!(rejected, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_record_payment_rejects_invalid_amount() {
        let (service, _dir) = setup_test();
        let payment = service.checkout(checkout_command(0.0)).unwrap().payment;

        let result = service.record_payment(RecordPaymentCommand {
            payment_id: payment.id.clone(),
            amount: f64::NAN,
            date: None,
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));

        // The stored record is unchanged after the rejection
        let history = service
            .payment_history(PaymentHistoryQuery {
                patient: "Maria Santos".to_string(),
            })
            .unwrap();
        assert_eq!(history.payments[0].amount_paid, 0.0);
    }

    #[test]
    fn test_record_payment_missing_record() {
        let (service, _dir) = setup_test();
        let result = service.record_payment(RecordPaymentCommand {
            payment_id: "payment::missing".to_string(),
            amount: 10.0,
            date: None,
        });
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_mark_fully_paid_sets_flag_only() {
        let (service, _dir) = setup_test();
        let payment = service.checkout(checkout_command(50.0)).unwrap().payment;

        let result = service.mark_fully_paid(&payment.id).unwrap();
        assert!(result.payment.is_fully_paid);
        // The money fields are left exactly as they were
        assert_eq!(result.payment.amount_paid, 50.0);
        assert_eq!(result.payment.remaining_balance, 130.0);
    }

    #[test]
    fn test_payment_history_matches_exact_patient() {
        let (service, _dir) = setup_test();
        service.checkout(checkout_command(0.0)).unwrap();
        service.checkout(checkout_command(180.0)).unwrap();

        let mut other = checkout_command(0.0);
        other.patient = "Carlos Reyes".to_string();
        service.checkout(other).unwrap();

        let history = service
            .payment_history(PaymentHistoryQuery {
                patient: "Maria Santos".to_string(),
            })
            .unwrap();
        assert_eq!(history.payments.len(), 2);
        assert!(history.payments.iter().all(|p| p.patient == "Maria Santos"));
    }

    #[test]
    fn test_list_payments_most_recent_first() {
        let (service, _dir) = setup_test();
        let first = service.checkout(checkout_command(50.0)).unwrap().payment;

        let mut other = checkout_command(0.0);
        other.patient = "Carlos Reyes".to_string();
        service.checkout(other).unwrap();

        // Recording a payment re-stamps the record, moving it to the top
        service
            .record_payment(RecordPaymentCommand {
                payment_id: first.id.clone(),
                amount: 30.0,
                date: None,
            })
            .unwrap();

        let listed = service.list_payments().unwrap();
        assert_eq!(listed.payments.len(), 2);
        assert_eq!(listed.payments[0].id, first.id);
        assert!(listed.payments[0].timestamp >= listed.payments[1].timestamp);
    }
}
