//! # REST API for the Treatment Catalog
//!
//! Endpoints for adding, listing, renaming, and removing treatments.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use shared::{CreateTreatmentRequest, TreatmentListResponse, UpdateTreatmentRequest};

use crate::domain::commands::treatments::{
    CreateTreatmentCommand, TreatmentListQuery, UpdateTreatmentCommand,
};
use crate::io::rest::mappers::treatment_mapper;
use crate::io::rest::{domain_error_response, AppState};

#[derive(Debug, Deserialize)]
pub struct TreatmentSearchParams {
    pub search: Option<String>,
}

/// Add a treatment to the catalog
pub async fn create_treatment(
    State(state): State<AppState>,
    Json(request): Json<CreateTreatmentRequest>,
) -> impl IntoResponse {
    info!("POST /api/treatments - name: {}", request.name);

    let command = CreateTreatmentCommand { name: request.name };

    match state.treatment_service.create_treatment(command) {
        Ok(result) => (
            StatusCode::CREATED,
            Json(treatment_mapper::to_dto(&result.treatment)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// List the catalog, optionally filtered by the `search` query parameter
pub async fn list_treatments(
    State(state): State<AppState>,
    Query(params): Query<TreatmentSearchParams>,
) -> impl IntoResponse {
    info!("GET /api/treatments - search: {:?}", params.search);

    let query = TreatmentListQuery {
        search: params.search,
    };

    match state.treatment_service.list_treatments(query) {
        Ok(result) => {
            let response = TreatmentListResponse {
                treatments: result.treatments.iter().map(treatment_mapper::to_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Rename a treatment
pub async fn update_treatment(
    State(state): State<AppState>,
    Path(treatment_id): Path<String>,
    Json(request): Json<UpdateTreatmentRequest>,
) -> impl IntoResponse {
    info!("PUT /api/treatments/{}", treatment_id);

    let command = UpdateTreatmentCommand {
        treatment_id,
        name: request.name,
    };

    match state.treatment_service.update_treatment(command) {
        Ok(result) => (
            StatusCode::OK,
            Json(treatment_mapper::to_dto(&result.treatment)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// Remove a treatment from the catalog. Existing payment records keep
/// their line items; the catalog is only a picker.
pub async fn delete_treatment(
    State(state): State<AppState>,
    Path(treatment_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/treatments/{}", treatment_id);

    match state.treatment_service.delete_treatment(&treatment_id) {
        Ok(_) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => domain_error_response(e),
    }
}
