//! Domain-level command and query types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod patients {
    use crate::domain::models::patient::Patient;

    /// Input for registering a new patient.
    #[derive(Debug, Clone)]
    pub struct CreatePatientCommand {
        pub name: String,
        pub address: String,
        pub number: String,
        pub gender: String,
        pub dob: String,
        pub allergies: String,
    }

    /// Input for updating an existing patient. `None` fields are left as-is.
    #[derive(Debug, Clone, Default)]
    pub struct UpdatePatientCommand {
        pub patient_id: String,
        pub name: Option<String>,
        pub address: Option<String>,
        pub number: Option<String>,
        pub gender: Option<String>,
        pub dob: Option<String>,
        pub allergies: Option<String>,
    }

    /// Query for listing patients, with the search box's name filter.
    #[derive(Debug, Clone, Default)]
    pub struct PatientListQuery {
        pub search: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct CreatePatientResult {
        pub patient: Patient,
    }

    #[derive(Debug, Clone)]
    pub struct UpdatePatientResult {
        pub patient: Patient,
    }

    #[derive(Debug, Clone)]
    pub struct PatientListResult {
        pub patients: Vec<Patient>,
    }

    #[derive(Debug, Clone)]
    pub struct DeletePatientResult {
        pub success_message: String,
    }
}

pub mod treatments {
    use crate::domain::models::treatment::Treatment;

    /// Input for adding a treatment to the catalog.
    #[derive(Debug, Clone)]
    pub struct CreateTreatmentCommand {
        pub name: String,
    }

    /// Input for renaming a treatment.
    #[derive(Debug, Clone)]
    pub struct UpdateTreatmentCommand {
        pub treatment_id: String,
        pub name: String,
    }

    /// Query for listing the catalog with the search box's name filter.
    #[derive(Debug, Clone, Default)]
    pub struct TreatmentListQuery {
        pub search: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateTreatmentResult {
        pub treatment: Treatment,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateTreatmentResult {
        pub treatment: Treatment,
    }

    #[derive(Debug, Clone)]
    pub struct TreatmentListResult {
        pub treatments: Vec<Treatment>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteTreatmentResult {
        pub success_message: String,
    }
}

pub mod appointments {
    use crate::domain::models::appointment::{Appointment, AppointmentStatus};

    /// Input for booking a new appointment. Dates are YYYY-MM-DD and times
    /// 24-hour HH:MM; the service parses and validates both.
    #[derive(Debug, Clone)]
    pub struct CreateAppointmentCommand {
        pub patient_name: String,
        pub date: String,
        pub time: String,
        pub treatment: String,
    }

    /// Input for editing an existing appointment. `None` fields are kept.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateAppointmentCommand {
        pub appointment_id: String,
        pub patient_name: Option<String>,
        pub date: Option<String>,
        pub time: Option<String>,
        pub treatment: Option<String>,
    }

    /// Input for advancing an appointment's status.
    #[derive(Debug, Clone)]
    pub struct UpdateStatusCommand {
        pub appointment_id: String,
        pub status: AppointmentStatus,
    }

    /// Query for the appointment table, with the search box's name filter.
    #[derive(Debug, Clone, Default)]
    pub struct AppointmentListQuery {
        pub patient_name: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateAppointmentResult {
        pub appointment: Appointment,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateAppointmentResult {
        pub appointment: Appointment,
    }

    #[derive(Debug, Clone)]
    pub struct AppointmentListResult {
        pub appointments: Vec<Appointment>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteAppointmentResult {
        pub success_message: String,
    }
}

pub mod payments {
    use crate::domain::models::payment::{LineItem, PaymentRecord};

    /// Input for creating a payment record at checkout. Creation and the
    /// first payment are combined; `amount_paid` may be zero.
    #[derive(Debug, Clone)]
    pub struct CheckoutCommand {
        pub patient: String,
        pub line_items: Vec<LineItem>,
        pub discount_percent: f64,
        pub amount_paid: f64,
    }

    /// Input for recording a partial payment against an existing record.
    #[derive(Debug, Clone)]
    pub struct RecordPaymentCommand {
        pub payment_id: String,
        pub amount: f64,
        /// Payment date (YYYY-MM-DD); defaults to today when omitted.
        pub date: Option<String>,
    }

    /// Query for a patient's payment history.
    #[derive(Debug, Clone)]
    pub struct PaymentHistoryQuery {
        pub patient: String,
    }

    #[derive(Debug, Clone)]
    pub struct CheckoutResult {
        pub payment: PaymentRecord,
    }

    #[derive(Debug, Clone)]
    pub struct RecordPaymentResult {
        pub payment: PaymentRecord,
    }

    #[derive(Debug, Clone)]
    pub struct MarkFullyPaidResult {
        pub payment: PaymentRecord,
    }

    #[derive(Debug, Clone)]
    pub struct PaymentHistoryResult {
        pub payments: Vec<PaymentRecord>,
    }

    #[derive(Debug, Clone)]
    pub struct PaymentListResult {
        pub payments: Vec<PaymentRecord>,
    }
}

pub mod dashboard {
    /// Counters for the landing screen.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DashboardSummaryResult {
        pub patients: usize,
        pub treatments: usize,
        pub appointments_today: usize,
        pub appointments_tomorrow: usize,
        pub appointments_this_week: usize,
        pub appointments_next_week: usize,
    }
}
