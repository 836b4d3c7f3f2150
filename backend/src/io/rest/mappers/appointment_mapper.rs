//! Appointment domain model ↔ shared DTO conversion.
//!
//! The DTO carries two computed display fields: the 12-hour time string
//! and the schedule badge for the given reference date.

use chrono::NaiveDate;

use crate::domain::models::appointment::{Appointment, AppointmentStatus};
use crate::domain::schedule::{self, DateBucket};

pub fn to_dto(appointment: &Appointment, reference: NaiveDate) -> shared::Appointment {
    shared::Appointment {
        id: appointment.id.clone(),
        patient_name: appointment.patient_name.clone(),
        date: appointment.date.format("%Y-%m-%d").to_string(),
        time: appointment.time.format("%H:%M").to_string(),
        display_time: schedule::format_time_12h(appointment.time),
        treatment: appointment.treatment.clone(),
        status: status_to_dto(appointment.status),
        schedule: bucket_to_dto(schedule::classify(reference, appointment.date)),
    }
}

pub fn status_to_dto(status: AppointmentStatus) -> shared::AppointmentStatus {
    match status {
        AppointmentStatus::Pending => shared::AppointmentStatus::Pending,
        AppointmentStatus::Ongoing => shared::AppointmentStatus::Ongoing,
        AppointmentStatus::Done => shared::AppointmentStatus::Done,
    }
}

pub fn status_from_dto(status: shared::AppointmentStatus) -> AppointmentStatus {
    match status {
        shared::AppointmentStatus::Pending => AppointmentStatus::Pending,
        shared::AppointmentStatus::Ongoing => AppointmentStatus::Ongoing,
        shared::AppointmentStatus::Done => AppointmentStatus::Done,
    }
}

fn bucket_to_dto(bucket: DateBucket) -> shared::ScheduleBucket {
    match bucket {
        DateBucket::Today => shared::ScheduleBucket::Today,
        DateBucket::Tomorrow => shared::ScheduleBucket::Tomorrow,
        DateBucket::ThisWeek => shared::ScheduleBucket::ThisWeek,
        DateBucket::NextWeek => shared::ScheduleBucket::NextWeek,
        DateBucket::None => shared::ScheduleBucket::None,
    }
}
