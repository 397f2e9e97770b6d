//! Pure functions for mapping patient errors to HTTP status codes.
//!
//! The error types carry no HTTP knowledge; this table is the only place
//! where they meet status codes.

use super::error::PatientError;
use crate::storage::repository_error_to_status_code;

/// Maps a [`PatientError`] to an HTTP status code.
///
/// - `InvalidRequest` -> 400 (Bad Request)
/// - `RecordNotFound` -> 400 (Bad Request)
/// - `Repository` -> see [`repository_error_to_status_code`]
///
/// # Examples
///
/// ```
/// use patient_records_core::patient::{patient_error_to_status_code, PatientError};
///
/// assert_eq!(patient_error_to_status_code(&PatientError::RecordNotFound(5)), 400);
/// ```
pub fn patient_error_to_status_code(error: &PatientError) -> u16 {
    match error {
        PatientError::InvalidRequest(_) => 400,
        PatientError::RecordNotFound(_) => 400,
        PatientError::Repository(repo_error) => repository_error_to_status_code(repo_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;

    #[test]
    fn test_invalid_request_maps_to_400() {
        assert_eq!(
            patient_error_to_status_code(&PatientError::null_record_or_id()),
            400
        );
    }

    #[test]
    fn test_record_not_found_maps_to_400() {
        assert_eq!(
            patient_error_to_status_code(&PatientError::RecordNotFound(5)),
            400
        );
    }

    #[test]
    fn test_repository_errors_use_repository_mapping() {
        let unavailable =
            PatientError::Repository(RepositoryError::ConnectionFailed("closed".to_string()));
        let failed = PatientError::Repository(RepositoryError::QueryFailed("boom".to_string()));

        assert_eq!(patient_error_to_status_code(&unavailable), 503);
        assert_eq!(patient_error_to_status_code(&failed), 500);
    }
}
