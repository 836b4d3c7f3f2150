//! Payment domain model ↔ shared DTO conversion.
//!
//! The stored money fields are passed through untouched; the display
//! strings are thousands-separated renderings computed here.

use crate::domain::ledger;
use crate::domain::models::payment::{LineItem, PaymentRecord, PaymentState};

pub fn to_dto(record: &PaymentRecord) -> shared::PaymentRecord {
    shared::PaymentRecord {
        id: record.id.clone(),
        patient: record.patient.clone(),
        treatments: record.treatments.iter().map(line_item_to_dto).collect(),
        discount: record.discount,
        total_cost: record.total_cost,
        amount_paid: record.amount_paid,
        remaining_balance: record.remaining_balance,
        is_fully_paid: record.is_fully_paid,
        state: state_to_dto(record.state()),
        timestamp: record.timestamp.to_rfc3339(),
        display_total_cost: ledger::format_thousands(record.total_cost),
        display_amount_paid: ledger::format_thousands(record.amount_paid),
        display_remaining_balance: ledger::format_thousands(record.remaining_balance),
    }
}

pub fn state_to_dto(state: PaymentState) -> shared::PaymentState {
    match state {
        PaymentState::Unpaid => shared::PaymentState::Unpaid,
        PaymentState::PartiallyPaid => shared::PaymentState::PartiallyPaid,
        PaymentState::FullyPaid => shared::PaymentState::FullyPaid,
    }
}

pub fn line_item_to_dto(item: &LineItem) -> shared::LineItem {
    shared::LineItem {
        name: item.name.clone(),
        price: item.price,
        quantity: item.quantity,
    }
}

pub fn line_item_from_dto(item: &shared::LineItem) -> LineItem {
    LineItem {
        name: item.name.clone(),
        price: item.price,
        quantity: item.quantity,
    }
}
