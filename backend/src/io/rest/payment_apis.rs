//! # REST API for Payment Tracking
//!
//! Endpoints for checkout, recording partial payments, marking a record
//! fully paid, and reading a patient's payment history.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::{CheckoutRequest, PaymentListResponse, RecordPaymentRequest};

use crate::domain::commands::payments::{
    CheckoutCommand, PaymentHistoryQuery, RecordPaymentCommand,
};
use crate::io::rest::mappers::payment_mapper;
use crate::io::rest::{domain_error_response, AppState};

/// Create a payment record at checkout. The first payment is part of
/// the request; `amount_paid` may be zero.
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/payments - patient: {}, items: {}",
        request.patient,
        request.treatments.len()
    );

    let command = CheckoutCommand {
        patient: request.patient,
        line_items: request
            .treatments
            .iter()
            .map(payment_mapper::line_item_from_dto)
            .collect(),
        discount_percent: request.discount,
        amount_paid: request.amount_paid,
    };

    match state.payment_service.checkout(command) {
        Ok(result) => {
            (StatusCode::CREATED, Json(payment_mapper::to_dto(&result.payment))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// List all payment records, most recent first
pub async fn list_payments(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/payments");

    match state.payment_service.list_payments() {
        Ok(result) => {
            let response = PaymentListResponse {
                payments: result.payments.iter().map(payment_mapper::to_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Record a partial payment against an existing record
pub async fn record_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
    Json(request): Json<RecordPaymentRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/payments/{}/payments - amount: {}",
        payment_id, request.amount
    );

    let command = RecordPaymentCommand {
        payment_id,
        amount: request.amount,
        date: request.date,
    };

    match state.payment_service.record_payment(command) {
        Ok(result) => {
            (StatusCode::OK, Json(payment_mapper::to_dto(&result.payment))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Mark a record fully paid without touching its money fields
pub async fn mark_fully_paid(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    info!("PUT /api/payments/{}/mark-paid", payment_id);

    match state.payment_service.mark_fully_paid(&payment_id) {
        Ok(result) => {
            (StatusCode::OK, Json(payment_mapper::to_dto(&result.payment))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// Payment history for one patient, matched by exact name
pub async fn patient_payment_history(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/patients/{}/payments", patient_id);

    let patient = match state.patient_service.get_patient(&patient_id) {
        Ok(Some(patient)) => patient,
        Ok(None) => return (StatusCode::NOT_FOUND, "Patient not found").into_response(),
        Err(e) => return domain_error_response(e),
    };

    let query = PaymentHistoryQuery {
        patient: patient.name,
    };

    match state.payment_service.payment_history(query) {
        Ok(result) => {
            let response = PaymentListResponse {
                payments: result.payments.iter().map(payment_mapper::to_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
