//! Domain model for a patient record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Contact phone number, kept as entered
    pub number: String,
    pub gender: String,
    pub dob: NaiveDate,
    /// Free-text allergy notes
    pub allergies: String,
}

impl Patient {
    /// Generate a unique patient document id.
    /// Format: `patient::<uuid>`
    pub fn generate_id() -> String {
        format!("patient::{}", Uuid::new_v4())
    }
}
