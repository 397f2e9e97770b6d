//! Patient record API operations.

use super::PatientRecordsClient;
use crate::error::Result;
use patient_records_core::patient::{
    CreatePatientRequest, PatientId, PatientRecord, UpdatePatientRequest,
};

impl PatientRecordsClient {
    /// List all patient records.
    pub async fn list_patients(&self) -> Result<Vec<PatientRecord>> {
        let response = self.client.get(self.url("/patient")).send().await?;
        self.handle_response(response).await
    }

    /// Get a patient record by ID.
    pub async fn get_patient(&self, id: PatientId) -> Result<PatientRecord> {
        let response = self
            .client
            .get(self.url(&format!("/patient/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new patient record.
    pub async fn create_patient(&self, request: &CreatePatientRequest) -> Result<PatientRecord> {
        let response = self
            .client
            .post(self.url("/patient"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update an existing patient record. The ID travels in the body.
    pub async fn update_patient(&self, request: &UpdatePatientRequest) -> Result<PatientRecord> {
        let response = self
            .client
            .put(self.url("/patient"))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a patient record by ID.
    pub async fn delete_patient(&self, id: PatientId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/patient/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
