//! Doctor endpoints.
//!
//! Reads return the denormalized [`DoctorWithDepartment`] view; a doctor whose
//! department has been deleted surfaces as a 500, not a crash.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{Doctor, DoctorPatch, DoctorWithDepartment, EntityId, NewDoctor};

use crate::{ApiError, AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/doctors",
    responses(
        (status = 200, description = "All doctors with their departments", body = [DoctorWithDepartment]),
        (status = 500, description = "Dangling department reference", body = ErrorBody)
    )
)]
pub async fn list_doctors(
    State(state): State<AppState>,
) -> Result<Json<Vec<DoctorWithDepartment>>, ApiError> {
    Ok(Json(state.read()?.get_doctors()?))
}

#[utoipa::path(
    get,
    path = "/api/doctors/{id}",
    params(("id" = EntityId, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "The doctor with its department", body = DoctorWithDepartment),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<DoctorWithDepartment>, ApiError> {
    state
        .read()?
        .get_doctor(id)?
        .map(Json)
        .ok_or(ApiError::not_found("doctor"))
}

#[utoipa::path(
    get,
    path = "/api/doctors/department/{department_id}",
    params(("department_id" = EntityId, Path, description = "Department id")),
    responses(
        (status = 200, description = "Doctors in the department", body = [DoctorWithDepartment])
    )
)]
pub async fn list_doctors_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<EntityId>,
) -> Result<Json<Vec<DoctorWithDepartment>>, ApiError> {
    Ok(Json(state.read()?.get_doctors_by_department(department_id)?))
}

#[utoipa::path(
    post,
    path = "/api/doctors",
    request_body = NewDoctor,
    responses(
        (status = 201, description = "Doctor created", body = Doctor),
        (status = 400, description = "Invalid body", body = ErrorBody)
    )
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    payload: Result<Json<NewDoctor>, JsonRejection>,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    let Json(new) = payload?;
    Ok((StatusCode::CREATED, Json(state.write()?.create_doctor(new))))
}

#[utoipa::path(
    put,
    path = "/api/doctors/{id}",
    params(("id" = EntityId, Path, description = "Doctor id")),
    request_body = DoctorPatch,
    responses(
        (status = 200, description = "Updated doctor", body = Doctor),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<DoctorPatch>, JsonRejection>,
) -> Result<Json<Doctor>, ApiError> {
    let Json(patch) = payload?;
    state
        .write()?
        .update_doctor(id, patch)
        .map(Json)
        .ok_or(ApiError::not_found("doctor"))
}

#[utoipa::path(
    delete,
    path = "/api/doctors/{id}",
    params(("id" = EntityId, Path, description = "Doctor id")),
    responses(
        (status = 204, description = "Doctor deleted"),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    if state.write()?.delete_doctor(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("doctor"))
    }
}
