//! HTTP client for the patient records API.

pub mod health;
pub mod patients;

use crate::error::{ClientError, Result};

/// HTTP client for the patient records API.
#[derive(Debug, Clone)]
pub struct PatientRecordsClient {
    client: reqwest::Client,
    base_url: String,
}

impl PatientRecordsClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body or turn the status and text into an error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(Self::server_error(response).await)
        }
    }

    /// Handle responses that carry no body on success.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::server_error(response).await)
        }
    }

    async fn server_error(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ClientError::ServerError { status, message }
    }
}
