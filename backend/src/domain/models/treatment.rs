//! Domain model for a treatment catalog entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A treatment the clinic offers. The catalog holds names only;
/// the price for a treatment is agreed per line item at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,
}

impl Treatment {
    /// Generate a unique treatment document id.
    /// Format: `treatment::<uuid>`
    pub fn generate_id() -> String {
        format!("treatment::{}", Uuid::new_v4())
    }
}
