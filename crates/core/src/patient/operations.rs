use super::error::PatientError;
use super::requests::UpdatePatientRequest;
use super::types::{PatientId, PatientRecord};

/// Checks that an update carries a record with an identifier.
///
/// Returns the identifier to look up together with the request. The other
/// fields are not inspected: a missing record or identifier is always an
/// invalid request.
pub fn validate_update(
    request: Option<UpdatePatientRequest>,
) -> Result<(PatientId, UpdatePatientRequest), PatientError> {
    match request {
        Some(request) => match request.patient_id {
            Some(id) => Ok((id, request)),
            None => Err(PatientError::null_record_or_id()),
        },
        None => Err(PatientError::null_record_or_id()),
    }
}

/// Copies the mutable fields of an update onto the stored record.
///
/// The identifier always comes from `existing`.
pub fn merge_update(
    mut existing: PatientRecord,
    request: UpdatePatientRequest,
) -> Result<PatientRecord, PatientError> {
    let (Some(name), Some(age), Some(address)) = (request.name, request.age, request.address)
    else {
        return Err(PatientError::missing_fields());
    };

    existing.name = name;
    existing.age = age;
    existing.address = address;

    Ok(existing)
}
