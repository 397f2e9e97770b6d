//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage backend is selected via feature flags and
//! handed to the `PatientService` at construction time.

use std::sync::Arc;

use patient_records_core::patient::demo_patients;
use patient_records_core::storage::PatientRepository;

use crate::config::Config;
use crate::service::PatientService;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Patient record operations.
    pub patients: PatientService,
    /// Request timeout applied by the router.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates an AppState backed by the given repository.
    pub fn with_repository(repo: Arc<dyn PatientRepository>, config: Config) -> Self {
        Self {
            patients: PatientService::new(repo),
            config: Arc::new(config),
        }
    }

    /// Seeds the demo patients through the service.
    pub async fn seed_demo_data(&self) -> Result<(), anyhow::Error> {
        for request in demo_patients() {
            self.patients.create(request).await?;
        }

        tracing::info!("Seeded demo patient records");
        Ok(())
    }
}

// ============================================================================
// Factory functions for the different storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            Ok(Self::with_repository(repo, config))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "Opened SQLite database");
            Ok(Self::with_repository(repo, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            Self::with_repository(Arc::new(InMemoryRepository::new()), Config::default())
        }
    }
}
