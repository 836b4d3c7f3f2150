//! Typed error for the domain layer.
//!
//! Every service returns one `DomainError` and the REST layer maps it
//! to a status code in a single place, so no handler invents its own
//! error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is missing or malformed; nothing was written.
    #[error("{0}")]
    Validation(String),

    /// A referenced document does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The document store call itself failed. Transient and permanent
    /// failures are not distinguished; nothing is retried.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
