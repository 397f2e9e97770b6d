//! Output formatting functions.

pub mod json;
pub mod pretty;

use patient_records_core::patient::PatientRecord;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a single record in the requested format.
pub fn format_patient(patient: &PatientRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(patient),
        OutputFormat::Pretty => Ok(pretty::format_patient(patient)),
    }
}

/// Format a list of records in the requested format.
pub fn format_patients(patients: &[PatientRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(patients),
        OutputFormat::Pretty => Ok(pretty::format_patients(patients)),
    }
}
