//! Storage layer: backend-agnostic traits plus the JSON document store.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{AppointmentStorage, PatientStorage, PaymentStorage, TreatmentStorage};
