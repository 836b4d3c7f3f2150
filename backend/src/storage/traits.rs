//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! different document-store backends without modification. All operations
//! are synchronous whole-document reads and writes; there is no locking
//! and the last writer wins.

use anyhow::Result;

use crate::domain::models::appointment::Appointment;
use crate::domain::models::patient::Patient;
use crate::domain::models::payment::PaymentRecord;
use crate::domain::models::treatment::Treatment;

/// Interface for the `patients` collection.
pub trait PatientStorage: Send + Sync {
    /// Store a new patient
    fn store_patient(&self, patient: &Patient) -> Result<()>;

    /// Retrieve a specific patient by ID
    fn get_patient(&self, patient_id: &str) -> Result<Option<Patient>>;

    /// List all patients in storage order
    fn list_patients(&self) -> Result<Vec<Patient>>;

    /// Update an existing patient
    fn update_patient(&self, patient: &Patient) -> Result<()>;

    /// Delete a patient by ID
    /// Returns true if the patient was found and deleted
    fn delete_patient(&self, patient_id: &str) -> Result<bool>;
}

/// Interface for the `treatments` collection.
pub trait TreatmentStorage: Send + Sync {
    /// Store a new treatment
    fn store_treatment(&self, treatment: &Treatment) -> Result<()>;

    /// Retrieve a specific treatment by ID
    fn get_treatment(&self, treatment_id: &str) -> Result<Option<Treatment>>;

    /// List all treatments in storage order
    fn list_treatments(&self) -> Result<Vec<Treatment>>;

    /// Update an existing treatment
    fn update_treatment(&self, treatment: &Treatment) -> Result<()>;

    /// Delete a treatment by ID
    /// Returns true if the treatment was found and deleted
    fn delete_treatment(&self, treatment_id: &str) -> Result<bool>;
}

/// Interface for the `appointments` collection.
pub trait AppointmentStorage: Send + Sync {
    /// Store a new appointment
    fn store_appointment(&self, appointment: &Appointment) -> Result<()>;

    /// Retrieve a specific appointment by ID
    fn get_appointment(&self, appointment_id: &str) -> Result<Option<Appointment>>;

    /// List all appointments in storage order
    fn list_appointments(&self) -> Result<Vec<Appointment>>;

    /// Update an existing appointment
    fn update_appointment(&self, appointment: &Appointment) -> Result<()>;

    /// Delete an appointment by ID
    /// Returns true if the appointment was found and deleted
    fn delete_appointment(&self, appointment_id: &str) -> Result<bool>;
}

/// Interface for the `payments` collection. Payment records are never
/// deleted in normal flow, so no delete operation is exposed.
pub trait PaymentStorage: Send + Sync {
    /// Store a new payment record
    fn store_payment(&self, payment: &PaymentRecord) -> Result<()>;

    /// Retrieve a specific payment record by ID
    fn get_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>>;

    /// List all payment records in storage order
    fn list_payments(&self) -> Result<Vec<PaymentRecord>>;

    /// Update an existing payment record
    fn update_payment(&self, payment: &PaymentRecord) -> Result<()>;

    /// All payment records for a patient, matched by exact name
    fn payments_for_patient(&self, patient: &str) -> Result<Vec<PaymentRecord>>;
}
