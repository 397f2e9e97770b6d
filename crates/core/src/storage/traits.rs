use async_trait::async_trait;

use crate::patient::{PatientId, PatientRecord};

use super::Result;

/// Repository for patient record rows.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Gets every record, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<PatientRecord>>;

    /// Gets a record by its ID.
    async fn find_by_id(&self, id: PatientId) -> Result<Option<PatientRecord>>;

    /// Persists a record.
    ///
    /// A record without an ID is inserted and receives a fresh ID; a record
    /// with an ID overwrites the matching row. Returns the stored record.
    async fn save(&self, record: PatientRecord) -> Result<PatientRecord>;

    /// Deletes a record by its ID.
    async fn delete_by_id(&self, id: PatientId) -> Result<()>;
}
