//! # Domain Module
//!
//! Business logic for the clinic front office. Everything here operates
//! independently of the REST layer and of the storage backend.
//!
//! ## Module Organization
//!
//! - **schedule**: date-bucket classification (Today / Tomorrow / This Week /
//!   Next Week) and time-of-day display helpers
//! - **ledger**: payment totals, discounts, balances, and paid-state rules
//! - **patient_service / treatment_service / appointment_service /
//!   payment_service**: CRUD services, one per front-office screen
//! - **dashboard_service**: the landing-screen counters
//! - **commands**: internal command/query types consumed by the services
//! - **models**: domain entities
//!
//! ## Business Rules
//!
//! - Validation happens before any store call; a failed store call leaves
//!   nothing half-applied
//! - Appointment statuses only move forward (pending → ongoing → done,
//!   pending → done); done is terminal
//! - A payment record is created once at checkout and then only accumulates
//!   payments; it is never deleted
//! - Derived money fields (total, remaining balance, fully-paid flag) are
//!   recomputed by the ledger, never written directly

pub mod appointment_service;
pub mod commands;
pub mod dashboard_service;
pub mod error;
pub mod ledger;
pub mod models;
pub mod patient_service;
pub mod payment_service;
pub mod schedule;
pub mod treatment_service;

pub use appointment_service::AppointmentService;
pub use dashboard_service::DashboardService;
pub use error::{DomainError, DomainResult};
pub use patient_service::PatientService;
pub use payment_service::PaymentService;
pub use treatment_service::TreatmentService;
