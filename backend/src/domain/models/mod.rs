//! Domain entities stored in the document collections.

pub mod appointment;
pub mod patient;
pub mod payment;
pub mod treatment;

pub use appointment::{Appointment, AppointmentStatus};
pub use patient::Patient;
pub use payment::{LineItem, PaymentRecord, PaymentState};
pub use treatment::Treatment;
