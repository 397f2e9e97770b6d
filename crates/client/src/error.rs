//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// plain-text body it sent back.
    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let error = ClientError::ServerError {
            status: 400,
            message: "Patient with ID 5 does not exist.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Server returned 400: Patient with ID 5 does not exist."
        );
    }
}
