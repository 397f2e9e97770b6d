use thiserror::Error;

use super::types::PatientId;
use crate::storage::RepositoryError;

/// Message for an update without a record or without an identifier.
const NULL_RECORD_OR_ID_MESSAGE: &str = "PatientRecord or ID must not be null!";

/// Message for an update whose mutable fields are incomplete.
const MISSING_FIELDS_MESSAGE: &str = "PatientRecord name, age and address must not be null!";

/// Errors raised by patient record operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatientError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Patient with ID {0} does not exist.")]
    RecordNotFound(PatientId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl PatientError {
    pub fn null_record_or_id() -> Self {
        Self::InvalidRequest(NULL_RECORD_OR_ID_MESSAGE.to_string())
    }

    pub fn missing_fields() -> Self {
        Self::InvalidRequest(MISSING_FIELDS_MESSAGE.to_string())
    }
}
