use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use patient_records_core::patient::{patient_error_to_status_code, PatientError};
use patient_records_core::storage::{repository_error_to_status_code, RepositoryError};

pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Resolves the status code through the core error tables. Undecodable
    /// request bodies are always 400.
    fn status_code(&self) -> StatusCode {
        if self.0.downcast_ref::<JsonRejection>().is_some() {
            return StatusCode::BAD_REQUEST;
        }

        let code = if let Some(patient_error) = self.0.downcast_ref::<PatientError>() {
            patient_error_to_status_code(patient_error)
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
