//! Patient record operations.
//!
//! `PatientService` owns the repository handle it is constructed with and
//! turns each decoded request into at most one lookup plus one write.

use std::sync::Arc;

use patient_records_core::patient::{
    merge_update, validate_update, CreatePatientRequest, PatientError, PatientId, PatientRecord,
    UpdatePatientRequest,
};
use patient_records_core::storage::PatientRepository;

type Result<T> = std::result::Result<T, PatientError>;

#[derive(Clone)]
pub struct PatientService {
    repo: Arc<dyn PatientRepository>,
}

impl PatientService {
    pub fn new(repo: Arc<dyn PatientRepository>) -> Self {
        Self { repo }
    }

    /// Returns every record in store order.
    pub async fn list(&self) -> Result<Vec<PatientRecord>> {
        Ok(self.repo.find_all().await?)
    }

    /// Returns the record with the given ID.
    pub async fn get(&self, id: PatientId) -> Result<PatientRecord> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(PatientError::RecordNotFound(id))
    }

    /// Persists a new record. The store assigns the ID.
    pub async fn create(&self, request: CreatePatientRequest) -> Result<PatientRecord> {
        let record = self.repo.save(request.into_record()).await?;

        tracing::info!(patient_id = ?record.patient_id, "Created patient record");

        Ok(record)
    }

    /// Overwrites name, age and address of an existing record.
    ///
    /// Fails with `InvalidRequest` when the request or its ID is missing and
    /// with `RecordNotFound` when the ID does not resolve.
    pub async fn update(&self, request: Option<UpdatePatientRequest>) -> Result<PatientRecord> {
        let (id, request) = validate_update(request)?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(PatientError::RecordNotFound(id))?;

        let merged = merge_update(existing, request)?;
        let saved = self.repo.save(merged).await?;

        tracing::info!(patient_id = id, "Updated patient record");

        Ok(saved)
    }

    /// Deletes the record with the given ID.
    pub async fn delete(&self, id: PatientId) -> Result<()> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(PatientError::RecordNotFound(id));
        }

        self.repo.delete_by_id(id).await?;

        tracing::info!(patient_id = id, "Deleted patient record");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use patient_records_core::patient::demo_patients;

    async fn seeded_service() -> PatientService {
        let service = PatientService::new(Arc::new(InMemoryRepository::new()));
        for request in demo_patients() {
            service.create(request).await.unwrap();
        }
        service
    }

    #[tokio::test]
    async fn test_list_returns_seeded_records() {
        let service = seeded_service().await;

        let records = service.list().await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Rayven Yor");
        assert_eq!(records[1].name, "David Landup");
        assert_eq!(records[2].name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_get_existing_record() {
        let service = seeded_service().await;

        let record = service.get(1).await.unwrap();

        assert_eq!(record.name, "Rayven Yor");
        assert_eq!(record.age, 23);
        assert_eq!(record.address, "Cebu Philippines");
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let service = seeded_service().await;

        let error = service.get(5).await.unwrap_err();

        assert_eq!(error, PatientError::RecordNotFound(5));
        assert_eq!(error.to_string(), "Patient with ID 5 does not exist.");
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_preserves_fields() {
        let service = PatientService::new(Arc::new(InMemoryRepository::new()));

        let record = service
            .create(CreatePatientRequest::new("John Doe", 47, "New York USA"))
            .await
            .unwrap();

        assert!(record.patient_id.is_some());
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.age, 47);
        assert_eq!(record.address, "New York USA");
    }

    #[tokio::test]
    async fn test_update_merges_and_preserves_id() {
        let service = seeded_service().await;

        let updated = service
            .update(Some(UpdatePatientRequest::new(
                1,
                "Rayven Zambo",
                23,
                "Cebu Philippines",
            )))
            .await
            .unwrap();

        assert_eq!(updated.patient_id, Some(1));
        assert_eq!(updated.name, "Rayven Zambo");
        assert_eq!(service.get(1).await.unwrap().name, "Rayven Zambo");
    }

    #[tokio::test]
    async fn test_update_without_request() {
        let service = seeded_service().await;

        let error = service.update(None).await.unwrap_err();

        assert_eq!(error.to_string(), "PatientRecord or ID must not be null!");
    }

    #[tokio::test]
    async fn test_update_with_null_id() {
        let service = seeded_service().await;
        let request = UpdatePatientRequest {
            patient_id: None,
            name: Some("sherlock Holmes".to_string()),
            age: Some(40),
            address: Some("221B Baker Street".to_string()),
        };

        let error = service.update(Some(request)).await.unwrap_err();

        assert_eq!(error, PatientError::null_record_or_id());
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let service = seeded_service().await;

        let error = service
            .update(Some(UpdatePatientRequest::new(
                5,
                "Sherlock Holmes",
                40,
                "22B Baker Street",
            )))
            .await
            .unwrap_err();

        assert_eq!(error, PatientError::RecordNotFound(5));
        assert_eq!(error.to_string(), "Patient with ID 5 does not exist.");
    }

    #[tokio::test]
    async fn test_update_with_missing_fields_leaves_record_untouched() {
        let service = seeded_service().await;
        let request = UpdatePatientRequest {
            patient_id: Some(2),
            name: Some("David L.".to_string()),
            ..Default::default()
        };

        let error = service.update(Some(request)).await.unwrap_err();

        assert_eq!(error, PatientError::missing_fields());
        assert_eq!(service.get(2).await.unwrap().name, "David Landup");
    }

    #[tokio::test]
    async fn test_delete_existing_record() {
        let service = seeded_service().await;

        service.delete(2).await.unwrap();

        assert_eq!(service.list().await.unwrap().len(), 2);
        assert_eq!(service.get(2).await, Err(PatientError::RecordNotFound(2)));
    }

    #[tokio::test]
    async fn test_delete_missing_record() {
        let service = seeded_service().await;

        let error = service.delete(5).await.unwrap_err();

        assert_eq!(error.to_string(), "Patient with ID 5 does not exist.");
    }

    #[tokio::test]
    async fn test_delete_twice_fails_second_time() {
        let service = seeded_service().await;

        service.delete(3).await.unwrap();
        let second = service.delete(3).await;

        assert_eq!(second, Err(PatientError::RecordNotFound(3)));
    }
}
