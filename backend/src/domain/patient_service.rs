use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::patients::{
    CreatePatientCommand, CreatePatientResult, DeletePatientResult, PatientListQuery,
    PatientListResult, UpdatePatientCommand, UpdatePatientResult,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::patient::Patient;
use crate::storage::json::{JsonConnection, PatientRepository};
use crate::storage::traits::PatientStorage;

/// Service for managing patient records.
#[derive(Clone)]
pub struct PatientService {
    patient_repository: PatientRepository,
}

impl PatientService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let patient_repository = PatientRepository::new(connection);
        Self { patient_repository }
    }

    /// Register a new patient.
    pub fn create_patient(&self, command: CreatePatientCommand) -> DomainResult<CreatePatientResult> {
        info!("Creating patient: name={}", command.name);

        self.validate_create_command(&command)?;
        let dob = parse_dob(&command.dob)?;

        let patient = Patient {
            id: Patient::generate_id(),
            name: command.name.trim().to_string(),
            address: command.address.trim().to_string(),
            number: command.number.trim().to_string(),
            gender: command.gender.trim().to_string(),
            dob,
            allergies: command.allergies.trim().to_string(),
        };

        self.patient_repository.store_patient(&patient)?;

        info!("Created patient: {} with ID: {}", patient.name, patient.id);

        Ok(CreatePatientResult { patient })
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, patient_id: &str) -> DomainResult<Option<Patient>> {
        let patient = self.patient_repository.get_patient(patient_id)?;
        if patient.is_none() {
            warn!("Patient not found: {}", patient_id);
        }
        Ok(patient)
    }

    /// List patients sorted by name, optionally filtered by the search box's
    /// case-insensitive name substring.
    pub fn list_patients(&self, query: PatientListQuery) -> DomainResult<PatientListResult> {
        let mut patients = self.patient_repository.list_patients()?;

        if let Some(search) = query.search.as_deref() {
            let needle = search.to_lowercase();
            patients.retain(|p| p.name.to_lowercase().contains(&needle));
        }
        patients.sort_by(|a, b| a.name.cmp(&b.name));

        info!("Found {} patients", patients.len());

        Ok(PatientListResult { patients })
    }

    /// Update an existing patient.
    pub fn update_patient(&self, command: UpdatePatientCommand) -> DomainResult<UpdatePatientResult> {
        info!("Updating patient: {}", command.patient_id);

        let mut patient = self
            .patient_repository
            .get_patient(&command.patient_id)?
            .ok_or_else(|| DomainError::not_found("Patient", &command.patient_id))?;

        if let Some(ref name) = command.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("Patient name cannot be empty"));
            }
        }

        if let Some(name) = command.name {
            patient.name = name.trim().to_string();
        }
        if let Some(address) = command.address {
            patient.address = address.trim().to_string();
        }
        if let Some(number) = command.number {
            patient.number = number.trim().to_string();
        }
        if let Some(gender) = command.gender {
            patient.gender = gender.trim().to_string();
        }
        if let Some(dob) = command.dob {
            patient.dob = parse_dob(&dob)?;
        }
        if let Some(allergies) = command.allergies {
            patient.allergies = allergies.trim().to_string();
        }

        self.patient_repository.update_patient(&patient)?;

        info!("Updated patient: {} with ID: {}", patient.name, patient.id);

        Ok(UpdatePatientResult { patient })
    }

    /// Delete a patient. Appointments and payment records reference the
    /// patient by name and are deliberately left untouched.
    pub fn delete_patient(&self, patient_id: &str) -> DomainResult<DeletePatientResult> {
        info!("Deleting patient: {}", patient_id);

        let patient = self
            .patient_repository
            .get_patient(patient_id)?
            .ok_or_else(|| DomainError::not_found("Patient", patient_id))?;

        self.patient_repository.delete_patient(patient_id)?;

        info!("Deleted patient: {} with ID: {}", patient.name, patient.id);

        Ok(DeletePatientResult {
            success_message: format!("Patient '{}' deleted successfully", patient.name),
        })
    }

    fn validate_create_command(&self, command: &CreatePatientCommand) -> DomainResult<()> {
        if command.name.trim().is_empty() {
            return Err(DomainError::validation("Patient name cannot be empty"));
        }
        if command.name.len() > 100 {
            return Err(DomainError::validation(
                "Patient name cannot exceed 100 characters",
            ));
        }
        Ok(())
    }
}

fn parse_dob(dob: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(dob, "%Y-%m-%d")
        .map_err(|_| DomainError::validation("Invalid date of birth format. Use YYYY-MM-DD."))
}
