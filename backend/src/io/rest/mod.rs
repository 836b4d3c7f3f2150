//! REST surface: axum handlers per resource, assembled into one router.
//!
//! All handlers follow the same shape: log the request, call the domain
//! service, and map the result. Error-to-status mapping lives in
//! `domain_error_response` so the taxonomy is applied in one place
//! instead of per screen.

pub mod appointment_apis;
pub mod dashboard_apis;
pub mod mappers;
pub mod patient_apis;
pub mod payment_apis;
pub mod treatment_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use tracing::error;

use crate::domain::{
    AppointmentService, DashboardService, DomainError, PatientService, PaymentService,
    TreatmentService,
};

/// Application state shared across handlers: one domain service per
/// front-office screen.
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService,
    pub treatment_service: TreatmentService,
    pub appointment_service: AppointmentService,
    pub payment_service: PaymentService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(
        patient_service: PatientService,
        treatment_service: TreatmentService,
        appointment_service: AppointmentService,
        payment_service: PaymentService,
        dashboard_service: DashboardService,
    ) -> Self {
        Self {
            patient_service,
            treatment_service,
            appointment_service,
            payment_service,
            dashboard_service,
        }
    }
}

/// Build the `/api` router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/patients",
            post(patient_apis::create_patient).get(patient_apis::list_patients),
        )
        .route(
            "/patients/:id",
            get(patient_apis::get_patient)
                .put(patient_apis::update_patient)
                .delete(patient_apis::delete_patient),
        )
        .route(
            "/patients/:id/payments",
            get(payment_apis::patient_payment_history),
        )
        .route(
            "/treatments",
            post(treatment_apis::create_treatment).get(treatment_apis::list_treatments),
        )
        .route(
            "/treatments/:id",
            put(treatment_apis::update_treatment).delete(treatment_apis::delete_treatment),
        )
        .route(
            "/appointments",
            post(appointment_apis::create_appointment).get(appointment_apis::list_appointments),
        )
        .route(
            "/appointments/:id",
            put(appointment_apis::update_appointment)
                .delete(appointment_apis::delete_appointment),
        )
        .route(
            "/appointments/:id/status",
            put(appointment_apis::update_appointment_status),
        )
        .route(
            "/payments",
            post(payment_apis::checkout).get(payment_apis::list_payments),
        )
        .route("/payments/:id/payments", post(payment_apis::record_payment))
        .route("/payments/:id/mark-paid", put(payment_apis::mark_fully_paid))
        .route("/dashboard", get(dashboard_apis::dashboard_summary))
        .with_state(state)
}

/// Map a domain error to its HTTP response. Validation failures are the
/// caller's fault, missing documents are 404, and store failures are
/// opaque 500s with the detail kept in the log.
pub(crate) fn domain_error_response(err: DomainError) -> Response {
    match &err {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
        DomainError::Storage(cause) => {
            error!("Store call failed: {:?}", cause);
            (StatusCode::INTERNAL_SERVER_ERROR, "Storage error").into_response()
        }
    }
}
