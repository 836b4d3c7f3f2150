use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::appointments::{
    AppointmentListQuery, AppointmentListResult, CreateAppointmentCommand,
    CreateAppointmentResult, DeleteAppointmentResult, UpdateAppointmentCommand,
    UpdateAppointmentResult, UpdateStatusCommand,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::appointment::{Appointment, AppointmentStatus};
use crate::storage::json::{AppointmentRepository, JsonConnection};
use crate::storage::traits::AppointmentStorage;

/// Service for booking and tracking appointments.
#[derive(Clone)]
pub struct AppointmentService {
    appointment_repository: AppointmentRepository,
}

impl AppointmentService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let appointment_repository = AppointmentRepository::new(connection);
        Self { appointment_repository }
    }

    /// Book a new appointment. New bookings always start as pending.
    pub fn create_appointment(
        &self,
        command: CreateAppointmentCommand,
    ) -> DomainResult<CreateAppointmentResult> {
        info!(
            "Creating appointment: patient={}, date={}",
            command.patient_name, command.date
        );

        self.validate_required(&command)?;
        let date = parse_date(&command.date)?;
        let time = parse_time(&command.time)?;

        let appointment = Appointment {
            id: Appointment::generate_id(),
            patient_name: command.patient_name.trim().to_string(),
            date,
            time,
            treatment: command.treatment.trim().to_string(),
            status: AppointmentStatus::Pending,
        };

        self.appointment_repository.store_appointment(&appointment)?;

        info!("Created appointment with ID: {}", appointment.id);

        Ok(CreateAppointmentResult { appointment })
    }

    /// List appointments ordered by date then time, optionally filtered by
    /// a case-insensitive patient name substring.
    pub fn list_appointments(
        &self,
        query: AppointmentListQuery,
    ) -> DomainResult<AppointmentListResult> {
        let mut appointments = self.appointment_repository.list_appointments()?;

        if let Some(filter) = query.patient_name.as_deref() {
            let needle = filter.to_lowercase();
            appointments.retain(|a| a.patient_name.to_lowercase().contains(&needle));
        }
        appointments.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));

        info!("Found {} appointments", appointments.len());

        Ok(AppointmentListResult { appointments })
    }

    /// Edit an existing appointment's booking fields. Status changes go
    /// through `update_status`.
    pub fn update_appointment(
        &self,
        command: UpdateAppointmentCommand,
    ) -> DomainResult<UpdateAppointmentResult> {
        info!("Updating appointment: {}", command.appointment_id);

        let mut appointment = self
            .appointment_repository
            .get_appointment(&command.appointment_id)?
            .ok_or_else(|| DomainError::not_found("Appointment", &command.appointment_id))?;

        if let Some(patient_name) = command.patient_name {
            if patient_name.trim().is_empty() {
                return Err(DomainError::validation("Patient name cannot be empty"));
            }
            appointment.patient_name = patient_name.trim().to_string();
        }
        if let Some(ref date) = command.date {
            appointment.date = parse_date(date)?;
        }
        if let Some(ref time) = command.time {
            appointment.time = parse_time(time)?;
        }
        if let Some(treatment) = command.treatment {
            if treatment.trim().is_empty() {
                return Err(DomainError::validation("Treatment cannot be empty"));
            }
            appointment.treatment = treatment.trim().to_string();
        }

        self.appointment_repository.update_appointment(&appointment)?;

        info!("Updated appointment: {}", appointment.id);

        Ok(UpdateAppointmentResult { appointment })
    }

    /// Advance an appointment's status. Only forward transitions are
    /// allowed; done is terminal.
    pub fn update_status(&self, command: UpdateStatusCommand) -> DomainResult<UpdateAppointmentResult> {
        info!(
            "Updating appointment status: {} -> {}",
            command.appointment_id,
            command.status.as_str()
        );

        let mut appointment = self
            .appointment_repository
            .get_appointment(&command.appointment_id)?
            .ok_or_else(|| DomainError::not_found("Appointment", &command.appointment_id))?;

        if !appointment.status.can_transition_to(command.status) {
            return Err(DomainError::validation(format!(
                "Cannot change appointment status from {} to {}",
                appointment.status.as_str(),
                command.status.as_str()
            )));
        }

        appointment.status = command.status;
        self.appointment_repository.update_appointment(&appointment)?;

        info!(
            "Appointment {} marked as {}",
            appointment.id,
            appointment.status.as_str()
        );

        Ok(UpdateAppointmentResult { appointment })
    }

    /// Cancel an appointment by deleting it.
    pub fn delete_appointment(&self, appointment_id: &str) -> DomainResult<DeleteAppointmentResult> {
        info!("Deleting appointment: {}", appointment_id);

        let appointment = self
            .appointment_repository
            .get_appointment(appointment_id)?
            .ok_or_else(|| DomainError::not_found("Appointment", appointment_id))?;

        self.appointment_repository.delete_appointment(appointment_id)?;

        info!("Deleted appointment: {}", appointment.id);

        Ok(DeleteAppointmentResult {
            success_message: "Appointment has been deleted".to_string(),
        })
    }

    fn validate_required(&self, command: &CreateAppointmentCommand) -> DomainResult<()> {
        if command.patient_name.trim().is_empty()
            || command.date.trim().is_empty()
            || command.time.trim().is_empty()
            || command.treatment.trim().is_empty()
        {
            return Err(DomainError::validation("Please fill in all fields"));
        }
        Ok(())
    }
}

fn parse_date(date: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::validation("Invalid date format. Use YYYY-MM-DD."))
}

fn parse_time(time: &str) -> DomainResult<NaiveTime> {
    let trimmed = time.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| DomainError::validation("Invalid time format. Use 24-hour HH:MM."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup_test() -> (AppointmentService, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        (AppointmentService::new(Arc::new(connection)), temp_dir)
    }

    fn book(service: &AppointmentService, patient: &str, date: &str, time: &str) -> Appointment {
        service
            .create_appointment(CreateAppointmentCommand {
                patient_name: patient.to_string(),
                date: date.to_string(),
                time: time.to_string(),
                treatment: "Cleaning".to_string(),
            })
            .unwrap()
            .appointment
    }

    #[test]
    fn test_create_appointment_starts_pending() {
        let (service, _dir) = setup_test();
        let appointment = book(&service, "Maria Santos", "2025-06-11", "14:30");
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.date.to_string(), "2025-06-11");
        assert_eq!(appointment.time.to_string(), "14:30:00");
    }

    #[test]
    fn test_create_appointment_requires_all_fields() {
        let (service, _dir) = setup_test();
        let result = service.create_appointment(CreateAppointmentCommand {
            patient_name: "Maria Santos".to_string(),
            date: "2025-06-11".to_string(),
            time: " ".to_string(),
            treatment: "Cleaning".to_string(),
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_create_appointment_rejects_bad_date_and_time() {
        let (service, _dir) = setup_test();
        let bad_date = service.create_appointment(CreateAppointmentCommand {
            patient_name: "Maria Santos".to_string(),
            date: "11/06/2025".to_string(),
            time: "14:30".to_string(),
            treatment: "Cleaning".to_string(),
        });
        assert!(matches!(bad_date, Err(DomainError::Validation(_))));

        let bad_time = service.create_appointment(CreateAppointmentCommand {
            patient_name: "Maria Santos".to_string(),
            date: "2025-06-11".to_string(),
            time: "2:30 PM".to_string(),
            treatment: "Cleaning".to_string(),
        });
        assert!(matches!(bad_time, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_list_sorted_by_date_then_time() {
        let (service, _dir) = setup_test();
        book(&service, "Carlos Reyes", "2025-06-12", "09:00");
        book(&service, "Ana Cruz", "2025-06-11", "15:00");
        book(&service, "Bea Lim", "2025-06-11", "09:30");

        let result = service
            .list_appointments(AppointmentListQuery::default())
            .unwrap();
        let order: Vec<&str> = result
            .appointments
            .iter()
            .map(|a| a.patient_name.as_str())
            .collect();
        assert_eq!(order, vec!["Bea Lim", "Ana Cruz", "Carlos Reyes"]);
    }

    #[test]
    fn test_list_filtered_by_patient_name() {
        let (service, _dir) = setup_test();
        book(&service, "Maria Santos", "2025-06-11", "09:00");
        book(&service, "Mario Cruz", "2025-06-11", "10:00");
        book(&service, "Ana Cruz", "2025-06-11", "11:00");

        let result = service
            .list_appointments(AppointmentListQuery {
                patient_name: Some("mari".to_string()),
            })
            .unwrap();
        assert_eq!(result.appointments.len(), 2);
    }

    #[test]
    fn test_update_appointment_fields() {
        let (service, _dir) = setup_test();
        let appointment = book(&service, "Maria Santos", "2025-06-11", "14:30");

        let result = service
            .update_appointment(UpdateAppointmentCommand {
                appointment_id: appointment.id.clone(),
                date: Some("2025-06-12".to_string()),
                treatment: Some("Root Canal".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(result.appointment.date.to_string(), "2025-06-12");
        assert_eq!(result.appointment.treatment, "Root Canal");
        assert_eq!(result.appointment.patient_name, "Maria Santos");
    }

    #[test]
    fn test_status_moves_forward_only() {
        let (service, _dir) = setup_test();
        let appointment = book(&service, "Maria Santos", "2025-06-11", "14:30");

        let ongoing = service
            .update_status(UpdateStatusCommand {
                appointment_id: appointment.id.clone(),
                status: AppointmentStatus::Ongoing,
            })
            .unwrap();
        assert_eq!(ongoing.appointment.status, AppointmentStatus::Ongoing);

        let done = service
            .update_status(UpdateStatusCommand {
                appointment_id: appointment.id.clone(),
                status: AppointmentStatus::Done,
            })
            .unwrap();
        assert_eq!(done.appointment.status, AppointmentStatus::Done);

        // Done is terminal
        let revert = service.update_status(UpdateStatusCommand {
            appointment_id: appointment.id.clone(),
            status: AppointmentStatus::Pending,
        });
        assert!(matches!(revert, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_status_can_skip_ongoing() {
        let (service, _dir) = setup_test();
        let appointment = book(&service, "Maria Santos", "2025-06-11", "14:30");

        let done = service
            .update_status(UpdateStatusCommand {
                appointment_id: appointment.id,
                status: AppointmentStatus::Done,
            })
            .unwrap();
        assert_eq!(done.appointment.status, AppointmentStatus::Done);
    }

    #[test]
    fn test_delete_appointment() {
        let (service, _dir) = setup_test();
        let appointment = book(&service, "Maria Santos", "2025-06-11", "14:30");

        service.delete_appointment(&appointment.id).unwrap();

        let result = service
            .list_appointments(AppointmentListQuery::default())
            .unwrap();
        assert!(result.appointments.is_empty());

        let missing = service.delete_appointment(&appointment.id);
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));
    }
}
