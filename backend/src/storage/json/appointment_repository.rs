use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

use super::connection::JsonConnection;
use crate::domain::models::appointment::Appointment;
use crate::storage::traits::AppointmentStorage;

const COLLECTION: &str = "appointments";

/// JSON-backed repository for the `appointments` collection.
#[derive(Clone)]
pub struct AppointmentRepository {
    connection: Arc<JsonConnection>,
}

impl AppointmentRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }

    fn load(&self) -> Result<Vec<Appointment>> {
        self.connection.read_collection(COLLECTION)
    }

    fn save(&self, appointments: &[Appointment]) -> Result<()> {
        self.connection.write_collection(COLLECTION, appointments)
    }
}

impl AppointmentStorage for AppointmentRepository {
    fn store_appointment(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = self.load()?;
        appointments.push(appointment.clone());
        self.save(&appointments)
    }

    fn get_appointment(&self, appointment_id: &str) -> Result<Option<Appointment>> {
        let appointments = self.load()?;
        Ok(appointments.into_iter().find(|a| a.id == appointment_id))
    }

    fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.load()
    }

    fn update_appointment(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = self.load()?;
        match appointments.iter_mut().find(|a| a.id == appointment.id) {
            Some(existing) => {
                *existing = appointment.clone();
                self.save(&appointments)
            }
            None => {
                warn!(
                    "Attempted to update a non-existent appointment: {}",
                    appointment.id
                );
                Err(anyhow::anyhow!("Appointment not found for update"))
            }
        }
    }

    fn delete_appointment(&self, appointment_id: &str) -> Result<bool> {
        let mut appointments = self.load()?;
        let before = appointments.len();
        appointments.retain(|a| a.id != appointment_id);
        if appointments.len() == before {
            return Ok(false);
        }
        self.save(&appointments)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::appointment::AppointmentStatus;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::tempdir;

    fn setup_test_repo() -> (AppointmentRepository, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (AppointmentRepository::new(Arc::new(connection)), temp_dir)
    }

    fn appointment(id: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            patient_name: "Maria Santos".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            treatment: "Cleaning".to_string(),
            status: AppointmentStatus::Pending,
        }
    }

    #[test]
    fn test_store_get_and_round_trip_types() {
        let (repo, _dir) = setup_test_repo();
        let a = appointment("appointment::1");
        repo.store_appointment(&a).unwrap();

        let loaded = repo.get_appointment("appointment::1").unwrap().unwrap();
        assert_eq!(loaded, a);
        assert_eq!(loaded.date.to_string(), "2025-06-11");
        assert_eq!(loaded.time.to_string(), "14:30:00");
    }

    #[test]
    fn test_update_status_persists() {
        let (repo, _dir) = setup_test_repo();
        let mut a = appointment("appointment::1");
        repo.store_appointment(&a).unwrap();

        a.status = AppointmentStatus::Done;
        repo.update_appointment(&a).unwrap();

        let loaded = repo.get_appointment("appointment::1").unwrap().unwrap();
        assert_eq!(loaded.status, AppointmentStatus::Done);
    }

    #[test]
    fn test_delete_appointment() {
        let (repo, _dir) = setup_test_repo();
        repo.store_appointment(&appointment("appointment::1")).unwrap();

        assert!(repo.delete_appointment("appointment::1").unwrap());
        assert!(!repo.delete_appointment("appointment::1").unwrap());
        assert!(repo.list_appointments().unwrap().is_empty());
    }
}
