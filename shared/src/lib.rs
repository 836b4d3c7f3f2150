use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a patient record in the clinic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Contact phone number
    pub number: String,
    pub gender: String,
    /// Date of birth, ISO 8601 date format (YYYY-MM-DD)
    pub dob: String,
    /// Free-text allergy notes
    pub allergies: String,
}

/// Request for registering a new patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePatientRequest {
    pub name: String,
    pub address: String,
    pub number: String,
    pub gender: String,
    pub dob: String, // ISO 8601 date format (YYYY-MM-DD)
    pub allergies: String,
}

/// Request for updating an existing patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub number: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    pub allergies: Option<String>,
}

/// Response containing a list of patients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientListResponse {
    pub patients: Vec<Patient>,
}

/// A catalog entry for a treatment offered by the clinic.
/// Prices are chosen per line item at checkout, not stored on the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,
}

/// Request for adding a treatment to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTreatmentRequest {
    pub name: String,
}

/// Request for renaming a treatment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateTreatmentRequest {
    pub name: String,
}

/// Response containing the treatment catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentListResponse {
    pub treatments: Vec<Treatment>,
}

/// Appointment progress status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Ongoing,
    Done,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Ongoing => write!(f, "ongoing"),
            AppointmentStatus::Done => write!(f, "done"),
        }
    }
}

/// Proximity bucket used to badge an appointment relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleBucket {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
    None,
}

/// Represents a scheduled appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Patient referenced by name, not by id
    pub patient_name: String,
    /// ISO 8601 date format (YYYY-MM-DD)
    pub date: String,
    /// 24-hour time of day (HH:MM)
    pub time: String,
    /// 12-hour rendering of `time` for display (e.g. "2:30 PM")
    pub display_time: String,
    pub treatment: String,
    pub status: AppointmentStatus,
    /// Proximity badge computed against today's date
    pub schedule: ScheduleBucket,
}

/// Request for booking a new appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAppointmentRequest {
    pub patient_name: String,
    pub date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub time: String, // 24-hour HH:MM
    pub treatment: String,
}

/// Request for editing an existing appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateAppointmentRequest {
    pub patient_name: Option<String>,
    pub date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    pub time: Option<String>, // 24-hour HH:MM
    pub treatment: Option<String>,
}

/// Request for advancing an appointment's status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateAppointmentStatusRequest {
    pub status: AppointmentStatus,
}

/// Response containing a list of appointments, ordered by date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
}

/// One treatment entry within a payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Unit price agreed at checkout
    pub price: f64,
    pub quantity: u32,
}

/// Paid-state of a payment record, derived from its money fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Unpaid,
    PartiallyPaid,
    FullyPaid,
}

/// A payment record for one checkout, updated in place by later payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    /// Patient referenced by name
    pub patient: String,
    pub treatments: Vec<LineItem>,
    /// Discount percentage applied to the sum of line items
    pub discount: f64,
    pub total_cost: f64,
    /// Cumulative amount received so far
    pub amount_paid: f64,
    /// Total cost minus amount paid, floored at zero
    pub remaining_balance: f64,
    pub is_fully_paid: bool,
    /// Derived paid-state for display (unpaid / partially paid / fully paid)
    pub state: PaymentState,
    /// Creation / last payment timestamp (RFC 3339)
    pub timestamp: String,
    /// Thousands-separated renderings for display; stored values are untouched
    pub display_total_cost: String,
    pub display_amount_paid: String,
    pub display_remaining_balance: String,
}

/// Request for creating a payment record at checkout.
/// Creation and the first payment are combined: `amount_paid` may be zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub patient: String,
    pub treatments: Vec<LineItem>,
    pub discount: f64,
    pub amount_paid: f64,
}

/// Request for recording a partial payment against an existing record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordPaymentRequest {
    pub amount: f64,
    /// Payment date (YYYY-MM-DD); defaults to today when omitted
    pub date: Option<String>,
}

/// Response containing a patient's payment history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentListResponse {
    pub payments: Vec<PaymentRecord>,
}

/// Dashboard counters for the landing screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub patients: usize,
    pub treatments: usize,
    pub appointments_today: usize,
    pub appointments_tomorrow: usize,
    /// Appointments within the current week, today included
    pub appointments_this_week: usize,
    pub appointments_next_week: usize,
}
