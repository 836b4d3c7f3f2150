//! # REST API for the Dashboard
//!
//! Single endpoint returning the landing screen's counters.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::DashboardSummary;

use crate::io::rest::{domain_error_response, AppState};

/// Counters for the landing screen, computed against today's date
pub async fn dashboard_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");

    match state.dashboard_service.summary() {
        Ok(result) => {
            let response = DashboardSummary {
                patients: result.patients,
                treatments: result.treatments,
                appointments_today: result.appointments_today,
                appointments_tomorrow: result.appointments_tomorrow,
                appointments_this_week: result.appointments_this_week,
                appointments_next_week: result.appointments_next_week,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
