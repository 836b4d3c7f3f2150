//! # JSON Document Store
//!
//! File-backed document storage: each named collection lives in one JSON
//! array file under the data directory (`patients.json`, `treatments.json`,
//! `appointments.json`, `payments.json`).
//!
//! ## Behavior
//!
//! - Reads of a missing collection file yield an empty collection
//! - Writes replace the whole file via an atomic temp-file rename, so a
//!   crashed write never leaves a torn file behind
//! - No locking; concurrent writers race and the last one wins

pub mod appointment_repository;
pub mod connection;
pub mod patient_repository;
pub mod payment_repository;
pub mod treatment_repository;

pub use appointment_repository::AppointmentRepository;
pub use connection::JsonConnection;
pub use patient_repository::PatientRepository;
pub use payment_repository::PaymentRepository;
pub use treatment_repository::TreatmentRepository;
