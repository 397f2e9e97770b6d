//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Patient records table
CREATE TABLE IF NOT EXISTS patient_record (
    patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    address TEXT NOT NULL
);
"#;

pub const INSERT_PATIENT: &str = r#"
INSERT INTO patient_record (name, age, address)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ALL_PATIENTS: &str = r#"
SELECT patient_id, name, age, address
FROM patient_record
ORDER BY patient_id ASC
"#;

pub const SELECT_PATIENT_BY_ID: &str = r#"
SELECT patient_id, name, age, address
FROM patient_record
WHERE patient_id = ?1
"#;

pub const UPDATE_PATIENT: &str = r#"
UPDATE patient_record
SET name = ?2, age = ?3, address = ?4
WHERE patient_id = ?1
"#;

pub const DELETE_PATIENT: &str = r#"
DELETE FROM patient_record
WHERE patient_id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS patient_record"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_PATIENT.contains("INSERT"));
        assert!(SELECT_ALL_PATIENTS.contains("ORDER BY patient_id"));
        assert!(SELECT_PATIENT_BY_ID.contains("WHERE patient_id = ?1"));
        assert!(UPDATE_PATIENT.contains("UPDATE"));
        assert!(DELETE_PATIENT.contains("DELETE"));
    }
}
