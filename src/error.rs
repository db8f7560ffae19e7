//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror`, one per concern.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::{ContactId, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the durable slot medium.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing a slot file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or parse the slot contents
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The medium refused the operation (e.g. quota exceeded, lock poisoned)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by [`crate::store::ContactStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// No contact with the given id exists
    #[error("contact not found: {0}")]
    NotFound(ContactId),

    /// The mutation could not be persisted; in-memory state is unchanged
    #[error("failed to persist contacts: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Errors surfaced by [`crate::services::AgendaService`] triggers.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Form input was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The targeted contact no longer exists
    #[error("contact not found: {0}")]
    NotFound(ContactId),

    /// The durable medium refused a write
    #[error("failed to persist contacts: {0}")]
    Persistence(PersistenceError),
}

impl From<StoreError> for AgendaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Persistence(e) => Self::Persistence(e),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with AgendaError
pub type AgendaResult<T> = Result<T, AgendaError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound(ContactId::new("abc").unwrap());
        assert_eq!(err.to_string(), "contact not found: abc");

        let err = AgendaError::from(ValidationError::LastNameRequired);
        assert_eq!(err.to_string(), "last name required");

        let err = PersistenceError::Unavailable("quota exceeded".to_string());
        assert_eq!(err.to_string(), "storage unavailable: quota exceeded");

        let err = ConfigError::InvalidValue {
            var: "AGENDA_STORAGE".to_string(),
            reason: "unknown backend".to_string(),
        };
        assert!(err.to_string().contains("AGENDA_STORAGE"));
    }

    #[test]
    fn test_store_error_maps_into_agenda_error() {
        let id = ContactId::new("gone").unwrap();
        let err = AgendaError::from(StoreError::NotFound(id.clone()));
        assert!(matches!(err, AgendaError::NotFound(ref missing) if *missing == id));

        let err = AgendaError::from(StoreError::Persistence(PersistenceError::Unavailable(
            "disk full".to_string(),
        )));
        assert!(matches!(err, AgendaError::Persistence(_)));
    }
}
