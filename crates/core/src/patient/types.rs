use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a patient record.
pub type PatientId = i64;

/// A patient record.
///
/// `patient_id` is `None` until the record has been saved; the store assigns
/// it and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
    pub name: String,
    pub age: i32,
    pub address: String,
}

impl PatientRecord {
    /// Creates an unsaved record (no identifier).
    pub fn new(name: impl Into<String>, age: i32, address: impl Into<String>) -> Self {
        Self {
            patient_id: None,
            name: name.into(),
            age,
            address: address.into(),
        }
    }

    /// Sets the identifier.
    pub fn with_id(mut self, patient_id: PatientId) -> Self {
        self.patient_id = Some(patient_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_id() {
        let record = PatientRecord::new("John Doe", 47, "New York USA");

        assert_eq!(record.patient_id, None);
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.age, 47);
        assert_eq!(record.address, "New York USA");
    }

    #[test]
    fn test_with_id() {
        let record = PatientRecord::new("Rayven Yor", 23, "Cebu Philippines").with_id(1);

        assert_eq!(record.patient_id, Some(1));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let record = PatientRecord::new("Jane Doe", 31, "New York USA").with_id(3);

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "patientId": 3,
                "name": "Jane Doe",
                "age": 31,
                "address": "New York USA"
            })
        );
    }

    #[test]
    fn test_unsaved_record_omits_id() {
        let record = PatientRecord::new("John Doe", 47, "New York USA");

        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("patientId").is_none());
    }

    #[test]
    fn test_deserializes_without_id() {
        let record: PatientRecord = serde_json::from_str(
            r#"{"name": "John Doe", "age": 47, "address": "New York USA"}"#,
        )
        .unwrap();

        assert_eq!(record, PatientRecord::new("John Doe", 47, "New York USA"));
    }
}
