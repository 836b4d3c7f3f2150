use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use super::connection::JsonConnection;
use crate::domain::models::treatment::Treatment;
use crate::storage::traits::TreatmentStorage;

const COLLECTION: &str = "treatments";

/// JSON-backed repository for the `treatments` collection.
#[derive(Clone)]
pub struct TreatmentRepository {
    connection: Arc<JsonConnection>,
}

impl TreatmentRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    fn load(&self) -> Result<Vec<Treatment>> {
        self.connection.read_collection(COLLECTION)
    }

    fn save(&self, treatments: &[Treatment]) -> Result<()> {
        self.connection.write_collection(COLLECTION, treatments)
    }
}

impl TreatmentStorage for TreatmentRepository {
    fn store_treatment(&self, treatment: &Treatment) -> Result<()> {
        let mut treatments = self.load()?;
        treatments.push(treatment.clone());
        self.save(&treatments)
    }

    fn get_treatment(&self, treatment_id: &str) -> Result<Option<Treatment>> {
        let treatments = self.load()?;
        Ok(treatments.into_iter().find(|t| t.id == treatment_id))
    }

    fn list_treatments(&self) -> Result<Vec<Treatment>> {
        self.load()
    }

    fn update_treatment(&self, treatment: &Treatment) -> Result<()> {
        let mut treatments = self.load()?;
        match treatments.iter_mut().find(|t| t.id == treatment.id) {
            Some(existing) => {
                *existing = treatment.clone();
                self.save(&treatments)
            }
            None => {
                warn!(
                    "Attempted to update a non-existent treatment: {}",
                    treatment.id
                );
                Err(anyhow::anyhow!("Treatment not found for update"))
            }
        }
    }

    fn delete_treatment(&self, treatment_id: &str) -> Result<bool> {
        let mut treatments = self.load()?;
        let before = treatments.len();
        treatments.retain(|t| t.id != treatment_id);
        if treatments.len() == before {
            return Ok(false);
        }
        self.save(&treatments)?;
        Ok(true)
    }
}
