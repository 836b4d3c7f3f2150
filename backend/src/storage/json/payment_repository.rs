use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use super::connection::JsonConnection;
use crate::domain::models::payment::PaymentRecord;
use crate::storage::traits::PaymentStorage;

const COLLECTION: &str = "payments";

/// JSON-backed repository for the `payments` collection.
#[derive(Clone)]
pub struct PaymentRepository {
    connection: Arc<JsonConnection>,
}

impl PaymentRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    fn load(&self) -> Result<Vec<PaymentRecord>> {
        self.connection.read_collection(COLLECTION)
    }

    fn save(&self, payments: &[PaymentRecord]) -> Result<()> {
        self.connection.write_collection(COLLECTION, payments)
    }
}

impl PaymentStorage for PaymentRepository {
    fn store_payment(&self, payment: &PaymentRecord) -> Result<()> {
        let mut payments = self.load()?;
        payments.push(payment.clone());
        self.save(&payments)
    }

    fn get_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>> {
        let payments = self.load()?;
        Ok(payments.into_iter().find(|p| p.id == payment_id))
    }

    fn list_payments(&self) -> Result<Vec<PaymentRecord>> {
        self.load()
    }

    fn update_payment(&self, payment: &PaymentRecord) -> Result<()> {
        let mut payments = self.load()?;
        match payments.iter_mut().find(|p| p.id == payment.id) {
            Some(existing) => {
                *existing = payment.clone();
                self.save(&payments)
            }
            None => {
                warn!(
                    "Attempted to update a non-existent payment record: {}",
                    payment.id
                );
                Err(anyhow::anyhow!("Payment record not found for update"))
            }
        }
    }

    fn payments_for_patient(&self, patient: &str) -> Result<Vec<PaymentRecord>> {
        let payments = self.load()?;
        Ok(payments.into_iter().filter(|p| p.patient == patient).collect())
    }
}
