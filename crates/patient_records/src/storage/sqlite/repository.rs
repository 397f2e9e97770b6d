//! SQLite repository implementation.
//!
//! Implements `PatientRepository` from `patient_records_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use patient_records_core::patient::{PatientId, PatientRecord};
use patient_records_core::storage::{PatientRepository, RepositoryError, Result};

use super::conversions::row_to_patient;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn insert(&self, record: PatientRecord) -> Result<PatientRecord> {
        let name = record.name.clone();
        let age = record.age;
        let address = record.address.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_PATIENT, rusqlite::params![name, age, address])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))?;

        Ok(record.with_id(id))
    }

    async fn update(&self, id: PatientId, record: PatientRecord) -> Result<PatientRecord> {
        let name = record.name.clone();
        let age = record.age;
        let address = record.address.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PATIENT,
                        rusqlite::params![id, name, age, address],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))?;

        Ok(record)
    }
}

#[async_trait]
impl PatientRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<PatientRecord>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_PATIENTS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_patient).map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }

    async fn find_by_id(&self, id: PatientId) -> Result<Option<PatientRecord>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PATIENT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_patient) {
                    Ok(record) => Ok(Some(record)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn save(&self, record: PatientRecord) -> Result<PatientRecord> {
        match record.patient_id {
            Some(id) => self.update(id, record).await,
            None => self.insert(record).await,
        }
    }

    async fn delete_by_id(&self, id: PatientId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_PATIENT, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }
}
