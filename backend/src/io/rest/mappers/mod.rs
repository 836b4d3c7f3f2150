//! Mapping between domain models and the DTOs in the `shared` crate.
//!
//! Display-only fields (12-hour times, schedule badges, thousands-separated
//! amounts) are filled in here so the domain layer stays free of
//! presentation concerns.

pub mod appointment_mapper;
pub mod patient_mapper;
pub mod payment_mapper;
pub mod treatment_mapper;
