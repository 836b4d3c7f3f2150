use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clinic_desk_backend::domain::{
    AppointmentService, DashboardService, PatientService, PaymentService, TreatmentService,
};
use clinic_desk_backend::io::rest::{api_router, AppState};
use clinic_desk_backend::storage::json::JsonConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let connection = Arc::new(JsonConnection::new_default()?);

    let state = AppState::new(
        PatientService::new(connection.clone()),
        TreatmentService::new(connection.clone()),
        AppointmentService::new(connection.clone()),
        PaymentService::new(connection.clone()),
        DashboardService::new(connection.clone()),
    );

    // CORS setup so a local frontend can make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api_router(state))
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
