use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use super::connection::JsonConnection;
use crate::domain::models::patient::Patient;
use crate::storage::traits::PatientStorage;

const COLLECTION: &str = "patients";

/// JSON-backed repository for the `patients` collection.
#[derive(Clone)]
pub struct PatientRepository {
    connection: Arc<JsonConnection>,
}

impl PatientRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    fn load(&self) -> Result<Vec<Patient>> {
        self.connection.read_collection(COLLECTION)
    }

    fn save(&self, patients: &[Patient]) -> Result<()> {
        self.connection.write_collection(COLLECTION, patients)
    }
}

impl PatientStorage for PatientRepository {
    fn store_patient(&self, patient: &Patient) -> Result<()> {
        let mut patients = self.load()?;
        patients.push(patient.clone());
        self.save(&patients)
    }

    fn get_patient(&self, patient_id: &str) -> Result<Option<Patient>> {
        let patients = self.load()?;
        Ok(patients.into_iter().find(|p| p.id == patient_id))
    }

    fn list_patients(&self) -> Result<Vec<Patient>> {
        self.load()
    }

    fn update_patient(&self, patient: &Patient) -> Result<()> {
        let mut patients = self.load()?;
        match patients.iter_mut().find(|p| p.id == patient.id) {
            Some(existing) => {
                *existing = patient.clone();
                self.save(&patients)
            }
            None => {
                warn!("Attempted to update a non-existent patient: {}", patient.id);
                Err(anyhow::anyhow!("Patient not found for update"))
            }
        }
    }

    fn delete_patient(&self, patient_id: &str) -> Result<bool> {
        let mut patients = self.load()?;
        let before = patients.len();
        patients.retain(|p| p.id != patient_id);
        if patients.len() == before {
            return Ok(false);
        }
        self.save(&patients)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn setup_test_repo() -> (PatientRepository, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (PatientRepository::new(Arc::new(connection)), temp_dir)
    }

    fn patient(id: &str, name: &str) -> Patient {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            address: "12 Elm Street".to_string(),
            number: "0917 555 0101".to_string(),
            gender: "Female".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 4, 15).unwrap(),
            allergies: "Penicillin".to_string(),
        }
    }

    #[test]
    fn test_store_and_get_patient() {
        let (repo, _dir) = setup_test_repo();
        let p = patient("patient::1", "Maria Santos");

        repo.store_patient(&p).unwrap();

        let loaded = repo.get_patient("patient::1").unwrap();
        assert_eq!(loaded, Some(p));
        assert!(repo.get_patient("patient::2").unwrap().is_none());
    }

    #[test]
    fn test_update_patient() {
        let (repo, _dir) = setup_test_repo();
        let mut p = patient("patient::1", "Maria Santos");
        repo.store_patient(&p).unwrap();

        p.allergies = "None".to_string();
        repo.update_patient(&p).unwrap();

        let loaded = repo.get_patient("patient::1").unwrap().unwrap();
        assert_eq!(loaded.allergies, "None");

        let ghost = patient("patient::ghost", "Nobody");
        assert!(repo.update_patient(&ghost).is_err());
    }

    #[test]
    fn test_delete_patient() {
        let (repo, _dir) = setup_test_repo();
        repo.store_patient(&patient("patient::1", "Maria Santos")).unwrap();

        assert!(repo.delete_patient("patient::1").unwrap());
        assert!(repo.list_patients().unwrap().is_empty());
        // Second delete is a no-op
        assert!(!repo.delete_patient("patient::1").unwrap());
    }
}
