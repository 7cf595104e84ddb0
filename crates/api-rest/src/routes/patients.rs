//! Patient endpoints.
//!
//! Creation enforces the one business rule in the system: `tc_no` must be
//! unique across patients. The check is a linear scan immediately before the
//! insert, both performed under the same write guard.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{EntityId, NewPatient, Patient, PatientPatch, PatientWithLastAppointment};
use serde::Deserialize;

use crate::{ApiError, AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "All patients with their latest appointment", body = [PatientWithLastAppointment]),
        (status = 500, description = "Dangling reference in an appointment", body = ErrorBody)
    )
)]
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientWithLastAppointment>>, ApiError> {
    Ok(Json(state.read()?.get_patients()?))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/patients/search",
    params(("q" = String, Query, description = "Substring to match against name, tc_no or phone")),
    responses(
        (status = 200, description = "Matching patients", body = [Patient]),
        (status = 400, description = "Missing query", body = ErrorBody)
    )
)]
pub async fn search_patients(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::validation("query parameter q is required"));
    }
    Ok(Json(state.read()?.search_patients(&query)))
}

#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    params(("id" = EntityId, Path, description = "Patient id")),
    responses(
        (status = 200, description = "The patient", body = Patient),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Patient>, ApiError> {
    state
        .read()?
        .get_patient(id)
        .map(Json)
        .ok_or(ApiError::not_found("patient"))
}

#[utoipa::path(
    post,
    path = "/api/patients",
    request_body = NewPatient,
    responses(
        (status = 201, description = "Patient created", body = Patient),
        (status = 400, description = "Invalid body or duplicate tc_no", body = ErrorBody)
    )
)]
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<NewPatient>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let Json(new) = payload?;
    let mut store = state.write()?;
    if store.get_patient_by_tc_no(new.tc_no.as_str()).is_some() {
        return Err(ApiError::DuplicateTcNo);
    }
    Ok((StatusCode::CREATED, Json(store.create_patient(new))))
}

#[utoipa::path(
    put,
    path = "/api/patients/{id}",
    params(("id" = EntityId, Path, description = "Patient id")),
    request_body = PatientPatch,
    responses(
        (status = 200, description = "Updated patient", body = Patient),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<PatientPatch>, JsonRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Json(patch) = payload?;
    state
        .write()?
        .update_patient(id, patch)
        .map(Json)
        .ok_or(ApiError::not_found("patient"))
}

#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    params(("id" = EntityId, Path, description = "Patient id")),
    responses(
        (status = 204, description = "Patient deleted"),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    if state.write()?.delete_patient(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("patient"))
    }
}
