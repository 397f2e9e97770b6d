//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `PatientRepository`
//! that keeps every row in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It is the
//! default backend and the one used by the unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use patient_records::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let saved = repo.save(PatientRecord::new("Jane Doe", 31, "New York USA")).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
