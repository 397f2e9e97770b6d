//! Patient record CRUD handlers.
//!
//! Decoding happens here; every decision is delegated to `PatientService`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use patient_records_core::patient::{
    CreatePatientRequest, PatientId, PatientRecord, UpdatePatientRequest,
};

use crate::{handlers::AppError, state::AppState};

/// List all patient records (GET /patient).
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientRecord>>, AppError> {
    let records = state.patients.list().await?;

    tracing::debug!(count = records.len(), "Listed patient records");

    Ok(Json(records))
}

/// Get a single patient record by ID (GET /patient/{id}).
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<PatientId>,
) -> Result<Json<PatientRecord>, AppError> {
    let record = state.patients.get(id).await?;
    Ok(Json(record))
}

/// Create a new patient record (POST /patient).
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> Result<Json<PatientRecord>, AppError> {
    let Json(payload) = payload?;

    tracing::debug!(payload = ?payload, "Received create patient request");

    let record = state.patients.create(payload).await?;

    Ok(Json(record))
}

/// Update an existing patient record (PUT /patient).
///
/// The identifier travels in the body. A `null` body or a body without
/// `patientId` is an invalid request.
pub async fn update_patient(
    State(state): State<AppState>,
    payload: Result<Json<Option<UpdatePatientRequest>>, JsonRejection>,
) -> Result<Json<PatientRecord>, AppError> {
    let Json(payload) = payload?;

    tracing::debug!(payload = ?payload, "Received update patient request");

    let record = state.patients.update(payload).await?;

    Ok(Json(record))
}

/// Delete a patient record by ID (DELETE /patient/{id}).
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<PatientId>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(patient_id = id, "Received delete patient request");

    state.patients.delete(id).await?;

    Ok(StatusCode::OK)
}
