//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use patient_records_core::patient::{PatientId, PatientRecord};
use patient_records_core::storage::{PatientRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Rows live in a `BTreeMap` so iteration follows ascending ID order, which
/// is also insertion order since IDs come from a monotonic sequence.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Arc<RwLock<BTreeMap<PatientId, PatientRecord>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository. IDs start at 1.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl PatientRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<PatientRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PatientId) -> Result<Option<PatientRecord>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn save(&self, mut record: PatientRecord) -> Result<PatientRecord> {
        let mut records = self.records.write().await;

        let id = match record.patient_id {
            Some(id) => {
                if !records.contains_key(&id) {
                    return Err(RepositoryError::NotFound {
                        entity_type: "PatientRecord",
                        id: id.to_string(),
                    });
                }
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                record.patient_id = Some(id);
                id
            }
        };

        records.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: PatientId) -> Result<()> {
        let mut records = self.records.write().await;
        if records.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "PatientRecord",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
