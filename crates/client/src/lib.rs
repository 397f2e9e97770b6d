//! patient_records_client - CLI client for the patient records API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::PatientRecordsClient;
pub use error::{ClientError, Result};
