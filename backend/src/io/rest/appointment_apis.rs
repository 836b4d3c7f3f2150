//! # REST API for Appointment Scheduling
//!
//! Endpoints for booking, listing, editing, advancing, and cancelling
//! appointments. List responses carry the schedule badge and 12-hour
//! display time computed against today's date.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use shared::{
    AppointmentListResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
    UpdateAppointmentStatusRequest,
};

use crate::domain::commands::appointments::{
    AppointmentListQuery, CreateAppointmentCommand, UpdateAppointmentCommand, UpdateStatusCommand,
};
use crate::io::rest::mappers::appointment_mapper;
use crate::io::rest::{domain_error_response, AppState};

#[derive(Debug, Deserialize)]
pub struct AppointmentSearchParams {
    /// Patient-name filter from the table's search box
    pub patient: Option<String>,
}

/// Book a new appointment. New bookings always start as pending.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/appointments - patient: {}, date: {}",
        request.patient_name, request.date
    );

    let command = CreateAppointmentCommand {
        patient_name: request.patient_name,
        date: request.date,
        time: request.time,
        treatment: request.treatment,
    };

    match state.appointment_service.create_appointment(command) {
        Ok(result) => {
            let today = Local::now().date_naive();
            (
                StatusCode::CREATED,
                Json(appointment_mapper::to_dto(&result.appointment, today)),
            )
                .into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// List appointments ordered by date and time, optionally filtered by
/// the `patient` query parameter
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(params): Query<AppointmentSearchParams>,
) -> impl IntoResponse {
    info!("GET /api/appointments - patient: {:?}", params.patient);

    let query = AppointmentListQuery {
        patient_name: params.patient,
    };

    match state.appointment_service.list_appointments(query) {
        Ok(result) => {
            let today = Local::now().date_naive();
            let response = AppointmentListResponse {
                appointments: result
                    .appointments
                    .iter()
                    .map(|a| appointment_mapper::to_dto(a, today))
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Edit an appointment's fields
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> impl IntoResponse {
    info!("PUT /api/appointments/{}", appointment_id);

    let command = UpdateAppointmentCommand {
        appointment_id,
        patient_name: request.patient_name,
        date: request.date,
        time: request.time,
        treatment: request.treatment,
    };

    match state.appointment_service.update_appointment(command) {
        Ok(result) => {
            let today = Local::now().date_naive();
            (
                StatusCode::OK,
                Json(appointment_mapper::to_dto(&result.appointment, today)),
            )
                .into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Advance an appointment's status. Only forward moves are accepted.
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateAppointmentStatusRequest>,
) -> impl IntoResponse {
    info!(
        "PUT /api/appointments/{}/status - status: {}",
        appointment_id, request.status
    );

    let command = UpdateStatusCommand {
        appointment_id,
        status: appointment_mapper::status_from_dto(request.status),
    };

    match state.appointment_service.update_status(command) {
        Ok(result) => {
            let today = Local::now().date_naive();
            (
                StatusCode::OK,
                Json(appointment_mapper::to_dto(&result.appointment, today)),
            )
                .into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Cancel an appointment
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/appointments/{}", appointment_id);

    match state.appointment_service.delete_appointment(&appointment_id) {
        Ok(_) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => domain_error_response(e),
    }
}
