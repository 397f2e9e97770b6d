//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use patient_records_core::patient::PatientRecord;
use rusqlite::Row;

/// Convert a SQLite row to a PatientRecord.
///
/// Expected columns: patient_id, name, age, address
pub fn row_to_patient(row: &Row) -> rusqlite::Result<PatientRecord> {
    let patient_id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let age: i32 = row.get(2)?;
    let address: String = row.get(3)?;

    Ok(PatientRecord {
        patient_id: Some(patient_id),
        name,
        age,
        address,
    })
}
