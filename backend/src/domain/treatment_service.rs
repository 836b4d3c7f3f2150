use std::sync::Arc;
use tracing::info;

use crate::domain::commands::treatments::{
    CreateTreatmentCommand, CreateTreatmentResult, DeleteTreatmentResult, TreatmentListQuery,
    TreatmentListResult, UpdateTreatmentCommand, UpdateTreatmentResult,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::treatment::Treatment;
use crate::storage::json::{JsonConnection, TreatmentRepository};
use crate::storage::traits::TreatmentStorage;

/// Service for managing the treatment catalog.
#[derive(Clone)]
pub struct TreatmentService {
    treatment_repository: TreatmentRepository,
}

impl TreatmentService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let treatment_repository = TreatmentRepository::new(connection);
        Self { treatment_repository }
    }

    /// Add a treatment to the catalog. Names are unique, case-insensitively.
    pub fn create_treatment(
        &self,
        command: CreateTreatmentCommand,
    ) -> DomainResult<CreateTreatmentResult> {
        info!("Creating treatment: name={}", command.name);

        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("Treatment name cannot be empty"));
        }
        self.ensure_name_available(&name, None)?;

        let treatment = Treatment {
            id: Treatment::generate_id(),
            name,
        };
        self.treatment_repository.store_treatment(&treatment)?;

        info!("Created treatment: {} with ID: {}", treatment.name, treatment.id);

        Ok(CreateTreatmentResult { treatment })
    }

    /// List the catalog sorted by name, optionally filtered by a
    /// case-insensitive name substring.
    pub fn list_treatments(&self, query: TreatmentListQuery) -> DomainResult<TreatmentListResult> {
        let mut treatments = self.treatment_repository.list_treatments()?;

        if let Some(search) = query.search.as_deref() {
            let needle = search.to_lowercase();
            treatments.retain(|t| t.name.to_lowercase().contains(&needle));
        }
        treatments.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(TreatmentListResult { treatments })
    }

    /// Rename a treatment.
    pub fn update_treatment(
        &self,
        command: UpdateTreatmentCommand,
    ) -> DomainResult<UpdateTreatmentResult> {
        info!("Updating treatment: {}", command.treatment_id);

        let mut treatment = self
            .treatment_repository
            .get_treatment(&command.treatment_id)?
            .ok_or_else(|| DomainError::not_found("Treatment", &command.treatment_id))?;

        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("Treatment name cannot be empty"));
        }
        self.ensure_name_available(&name, Some(&treatment.id))?;

        treatment.name = name;
        self.treatment_repository.update_treatment(&treatment)?;

        info!("Updated treatment: {} with ID: {}", treatment.name, treatment.id);

        Ok(UpdateTreatmentResult { treatment })
    }

    /// Remove a treatment from the catalog. Existing appointments and
    /// payment records keep the name they were written with.
    pub fn delete_treatment(&self, treatment_id: &str) -> DomainResult<DeleteTreatmentResult> {
        info!("Deleting treatment: {}", treatment_id);

        let treatment = self
            .treatment_repository
            .get_treatment(treatment_id)?
            .ok_or_else(|| DomainError::not_found("Treatment", treatment_id))?;

        self.treatment_repository.delete_treatment(treatment_id)?;

        Ok(DeleteTreatmentResult {
            success_message: format!("Treatment '{}' deleted successfully", treatment.name),
        })
    }

    fn ensure_name_available(&self, name: &str, exclude_id: Option<&str>) -> DomainResult<()> {
        let treatments = self.treatment_repository.list_treatments()?;
        let taken = treatments.iter().any(|t| {
            t.name.eq_ignore_ascii_case(name) && exclude_id.map_or(true, |id| t.id != id)
        });
        if taken {
            return Err(DomainError::validation(format!(
                "Treatment '{}' already exists",
                name
            )));
        }
        Ok(())
    }
}
