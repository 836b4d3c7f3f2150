//! Clinic Desk backend: front-office services for a small clinic.
//!
//! The crate is split into three layers, none of which knows about the
//! browser UI that sits in front of it:
//!
//! - `domain` — business logic: patients, the treatment catalog,
//!   appointment scheduling, and payment tracking.
//! - `storage` — storage traits plus the JSON document-store backend.
//! - `io` — the REST surface (axum handlers and router).

pub mod domain;
pub mod io;
pub mod storage;
