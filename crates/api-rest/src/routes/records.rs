//! Medical record endpoints. Records are returned flat, without joins.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{EntityId, MedicalRecord, MedicalRecordPatch, NewMedicalRecord};

use crate::{ApiError, AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/medical-records",
    responses(
        (status = 200, description = "All medical records", body = [MedicalRecord])
    )
)]
pub async fn list_medical_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<MedicalRecord>>, ApiError> {
    Ok(Json(state.read()?.get_medical_records()))
}

#[utoipa::path(
    get,
    path = "/api/medical-records/patient/{patient_id}",
    params(("patient_id" = EntityId, Path, description = "Patient id")),
    responses(
        (status = 200, description = "The patient's medical records", body = [MedicalRecord])
    )
)]
pub async fn list_medical_records_by_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<EntityId>,
) -> Result<Json<Vec<MedicalRecord>>, ApiError> {
    Ok(Json(state.read()?.get_medical_records_by_patient(patient_id)))
}

#[utoipa::path(
    get,
    path = "/api/medical-records/{id}",
    params(("id" = EntityId, Path, description = "Record id")),
    responses(
        (status = 200, description = "The medical record", body = MedicalRecord),
        (status = 404, description = "Record not found", body = ErrorBody)
    )
)]
pub async fn get_medical_record(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<MedicalRecord>, ApiError> {
    state
        .read()?
        .get_medical_record(id)
        .map(Json)
        .ok_or(ApiError::not_found("medical record"))
}

#[utoipa::path(
    post,
    path = "/api/medical-records",
    request_body = NewMedicalRecord,
    responses(
        (status = 201, description = "Record created", body = MedicalRecord),
        (status = 400, description = "Invalid body", body = ErrorBody)
    )
)]
pub async fn create_medical_record(
    State(state): State<AppState>,
    payload: Result<Json<NewMedicalRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<MedicalRecord>), ApiError> {
    let Json(new) = payload?;
    Ok((
        StatusCode::CREATED,
        Json(state.write()?.create_medical_record(new)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/medical-records/{id}",
    params(("id" = EntityId, Path, description = "Record id")),
    request_body = MedicalRecordPatch,
    responses(
        (status = 200, description = "Updated record", body = MedicalRecord),
        (status = 404, description = "Record not found", body = ErrorBody)
    )
)]
pub async fn update_medical_record(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<MedicalRecordPatch>, JsonRejection>,
) -> Result<Json<MedicalRecord>, ApiError> {
    let Json(patch) = payload?;
    state
        .write()?
        .update_medical_record(id, patch)
        .map(Json)
        .ok_or(ApiError::not_found("medical record"))
}

#[utoipa::path(
    delete,
    path = "/api/medical-records/{id}",
    params(("id" = EntityId, Path, description = "Record id")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "Record not found", body = ErrorBody)
    )
)]
pub async fn delete_medical_record(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    if state.write()?.delete_medical_record(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("medical record"))
    }
}
