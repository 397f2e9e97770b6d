//! Core for the patient_records project.
//!
//! Pure data types, validation and the storage contract. Nothing in this crate
//! performs I/O; the server crate supplies the repository implementations and
//! the HTTP boundary.

pub mod patient;
pub mod storage;
