//! API request types for patient record operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::types::{PatientId, PatientRecord};

/// Request payload for creating a patient record.
///
/// The identifier is assigned by the store, so a `patientId` sent by the
/// client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: i32,
    pub address: String,
}

impl CreatePatientRequest {
    pub fn new(name: impl Into<String>, age: i32, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
        }
    }

    /// Convert into an unsaved PatientRecord.
    pub fn into_record(self) -> PatientRecord {
        PatientRecord::new(self.name, self.age, self.address)
    }
}

/// Request payload for updating a patient record.
///
/// Every field is optional on the wire so that a missing identifier can be
/// reported as an invalid request instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UpdatePatientRequest {
    /// Create a fully populated update request.
    pub fn new(
        patient_id: PatientId,
        name: impl Into<String>,
        age: i32,
        address: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: Some(patient_id),
            name: Some(name.into()),
            age: Some(age),
            address: Some(address.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_into_record() {
        let record = CreatePatientRequest::new("John Doe", 47, "New York USA").into_record();

        assert_eq!(record.patient_id, None);
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.age, 47);
        assert_eq!(record.address, "New York USA");
    }

    #[test]
    fn test_create_request_ignores_patient_id() {
        let request: CreatePatientRequest = serde_json::from_str(
            r#"{"patientId": 9, "name": "John Doe", "age": 47, "address": "New York USA"}"#,
        )
        .unwrap();

        assert_eq!(request.into_record().patient_id, None);
    }

    #[test]
    fn test_create_request_requires_fields() {
        let result: Result<CreatePatientRequest, _> =
            serde_json::from_str(r#"{"name": "John Doe", "age": 47}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_without_id_deserializes() {
        let request: UpdatePatientRequest = serde_json::from_str(
            r#"{"name": "sherlock Holmes", "age": 40, "address": "221B Baker Street"}"#,
        )
        .unwrap();

        assert_eq!(request.patient_id, None);
        assert_eq!(request.name.as_deref(), Some("sherlock Holmes"));
    }

    #[test]
    fn test_update_request_explicit_null_id() {
        let request: UpdatePatientRequest =
            serde_json::from_str(r#"{"patientId": null, "name": "A", "age": 1, "address": "B"}"#)
                .unwrap();

        assert_eq!(request.patient_id, None);
    }
}
