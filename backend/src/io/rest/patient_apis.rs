//! # REST API for Patient Management
//!
//! Endpoints for registering, retrieving, updating, and deleting patients.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use shared::{CreatePatientRequest, PatientListResponse, UpdatePatientRequest};

use crate::domain::commands::patients::{
    CreatePatientCommand, PatientListQuery, UpdatePatientCommand,
};
use crate::io::rest::mappers::patient_mapper;
use crate::io::rest::{domain_error_response, AppState};

#[derive(Debug, Deserialize)]
pub struct PatientSearchParams {
    pub search: Option<String>,
}

/// Register a new patient
pub async fn create_patient(
    State(state): State<AppState>,
    Json(request): Json<CreatePatientRequest>,
) -> impl IntoResponse {
    info!("POST /api/patients - name: {}", request.name);

    let command = CreatePatientCommand {
        name: request.name,
        address: request.address,
        number: request.number,
        gender: request.gender,
        dob: request.dob,
        allergies: request.allergies,
    };

    match state.patient_service.create_patient(command) {
        Ok(result) => {
            (StatusCode::CREATED, Json(patient_mapper::to_dto(&result.patient))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Get a patient by ID
pub async fn get_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/patients/{}", patient_id);

    match state.patient_service.get_patient(&patient_id) {
        Ok(Some(patient)) => (StatusCode::OK, Json(patient_mapper::to_dto(&patient))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Patient not found").into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// List patients, optionally filtered by the `search` query parameter
pub async fn list_patients(
    State(state): State<AppState>,
    Query(params): Query<PatientSearchParams>,
) -> impl IntoResponse {
    info!("GET /api/patients - search: {:?}", params.search);

    let query = PatientListQuery {
        search: params.search,
    };

    match state.patient_service.list_patients(query) {
        Ok(result) => {
            let response = PatientListResponse {
                patients: result.patients.iter().map(patient_mapper::to_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Update a patient
pub async fn update_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    Json(request): Json<UpdatePatientRequest>,
) -> impl IntoResponse {
    info!("PUT /api/patients/{}", patient_id);

    let command = UpdatePatientCommand {
        patient_id,
        name: request.name,
        address: request.address,
        number: request.number,
        gender: request.gender,
        dob: request.dob,
        allergies: request.allergies,
    };

    match state.patient_service.update_patient(command) {
        Ok(result) => {
            (StatusCode::OK, Json(patient_mapper::to_dto(&result.patient))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Delete a patient. Appointments and payment records referencing the
/// patient by name are left in place.
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/patients/{}", patient_id);

    match state.patient_service.delete_patient(&patient_id) {
        Ok(_) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => domain_error_response(e),
    }
}
