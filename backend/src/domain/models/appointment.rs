//! Domain model for an appointment.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Ongoing,
    Done,
}

impl AppointmentStatus {
    /// Whether a status change is allowed. Statuses only move forward:
    /// pending → ongoing → done, with pending → done permitted as a skip.
    /// Done is terminal and there is no path back from ongoing.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Pending, AppointmentStatus::Ongoing)
                | (AppointmentStatus::Pending, AppointmentStatus::Done)
                | (AppointmentStatus::Ongoing, AppointmentStatus::Done)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Ongoing => "ongoing",
            AppointmentStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Patient referenced by name, not by id — matching how the front
    /// desk books appointments. Deleting a patient does not cascade here.
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub treatment: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Generate a unique appointment document id.
    /// Format: `appointment::<uuid>`
    pub fn generate_id() -> String {
        format!("appointment::{}", Uuid::new_v4())
    }
}
