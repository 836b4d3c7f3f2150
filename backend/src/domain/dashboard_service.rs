use chrono::{Duration, Local, NaiveDate};
use std::sync::Arc;
use tracing::info;

use crate::domain::commands::dashboard::DashboardSummaryResult;
use crate::domain::error::DomainResult;
use crate::domain::schedule;
use crate::storage::json::{
    AppointmentRepository, JsonConnection, PatientRepository, TreatmentRepository,
};
use crate::storage::traits::{AppointmentStorage, PatientStorage, TreatmentStorage};

/// Service for the landing-screen counters.
///
/// Unlike the per-row schedule badge, the appointment counters use
/// independent range predicates: an appointment today is counted under
/// Today AND under This Week.
#[derive(Clone)]
pub struct DashboardService {
    patient_repository: PatientRepository,
    treatment_repository: TreatmentRepository,
    appointment_repository: AppointmentRepository,
}

impl DashboardService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            patient_repository: PatientRepository::new(connection.clone()),
            treatment_repository: TreatmentRepository::new(connection.clone()),
            appointment_repository: AppointmentRepository::new(connection),
        }
    }

    /// Summary counters for today's date.
    pub fn summary(&self) -> DomainResult<DashboardSummaryResult> {
        self.summary_for(Local::now().date_naive())
    }

    /// Summary counters relative to an explicit reference date.
    pub fn summary_for(&self, reference: NaiveDate) -> DomainResult<DashboardSummaryResult> {
        let patients = self.patient_repository.list_patients()?.len();
        let treatments = self.treatment_repository.list_treatments()?.len();
        let appointments = self.appointment_repository.list_appointments()?;

        let tomorrow = reference + Duration::days(1);
        let bounds = schedule::week_bounds(reference);

        let mut today_count = 0;
        let mut tomorrow_count = 0;
        let mut this_week_count = 0;
        let mut next_week_count = 0;
        for appointment in &appointments {
            let date = appointment.date;
            if date == reference {
                today_count += 1;
            }
            if date == tomorrow {
                tomorrow_count += 1;
            }
            if date >= bounds.start_of_week && date <= bounds.end_of_week {
                this_week_count += 1;
            }
            if date >= bounds.start_of_next_week && date <= bounds.end_of_next_week {
                next_week_count += 1;
            }
        }

        info!(
            "Dashboard summary: {} patients, {} treatments, {} appointments",
            patients,
            treatments,
            appointments.len()
        );

        Ok(DashboardSummaryResult {
            patients,
            treatments,
            appointments_today: today_count,
            appointments_tomorrow: tomorrow_count,
            appointments_this_week: this_week_count,
            appointments_next_week: next_week_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::appointments::CreateAppointmentCommand;
    use crate::domain::commands::patients::CreatePatientCommand;
    use crate::domain::commands::treatments::CreateTreatmentCommand;
    use crate::domain::{AppointmentService, PatientService, TreatmentService};
    use tempfile::tempdir;

    struct Fixture {
        dashboard: DashboardService,
        appointments: AppointmentService,
        patients: PatientService,
        treatments: TreatmentService,
        _dir: tempfile::TempDir,
    }

    fn setup_test() -> Fixture {
        let temp_dir = tempdir().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        Fixture {
            dashboard: DashboardService::new(connection.clone()),
            appointments: AppointmentService::new(connection.clone()),
            patients: PatientService::new(connection.clone()),
            treatments: TreatmentService::new(connection),
            _dir: temp_dir,
        }
    }

    fn book(fixture: &Fixture, date: &str) {
        fixture
            .appointments
            .create_appointment(CreateAppointmentCommand {
                patient_name: "Maria Santos".to_string(),
                date: date.to_string(),
                time: "09:00".to_string(),
                treatment: "Cleaning".to_string(),
            })
            .unwrap();
    }

    #[test]
    fn test_empty_store_yields_zero_counts() {
        let fixture = setup_test();
        let reference = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let summary = fixture.dashboard.summary_for(reference).unwrap();
        assert_eq!(summary.patients, 0);
        assert_eq!(summary.treatments, 0);
        assert_eq!(summary.appointments_today, 0);
        assert_eq!(summary.appointments_next_week, 0);
    }

    #[test]
    fn test_appointment_counts_overlap_by_design() {
        let fixture = setup_test();
        // Wednesday; week is Jun 8-14, next week Jun 15-21
        let reference = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();

        book(&fixture, "2025-06-11"); // today (also this week)
        book(&fixture, "2025-06-12"); // tomorrow (also this week)
        book(&fixture, "2025-06-14"); // this week only
        book(&fixture, "2025-06-16"); // next week
        book(&fixture, "2025-07-01"); // out of range

        let summary = fixture.dashboard.summary_for(reference).unwrap();
        assert_eq!(summary.appointments_today, 1);
        assert_eq!(summary.appointments_tomorrow, 1);
        // Today and tomorrow fall inside the week range too
        assert_eq!(summary.appointments_this_week, 3);
        assert_eq!(summary.appointments_next_week, 1);
    }

    #[test]
    fn test_entity_counts() {
        let fixture = setup_test();
        fixture
            .patients
            .create_patient(CreatePatientCommand {
                name: "Maria Santos".to_string(),
                address: "12 Elm Street".to_string(),
                number: "0917 555 0101".to_string(),
                gender: "Female".to_string(),
                dob: "1990-04-15".to_string(),
                allergies: String::new(),
            })
            .unwrap();
        fixture
            .treatments
            .create_treatment(CreateTreatmentCommand {
                name: "Cleaning".to_string(),
            })
            .unwrap();
        fixture
            .treatments
            .create_treatment(CreateTreatmentCommand {
                name: "Root Canal".to_string(),
            })
            .unwrap();

        let reference = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let summary = fixture.dashboard.summary_for(reference).unwrap();
        assert_eq!(summary.patients, 1);
        assert_eq!(summary.treatments, 2);
    }
}
