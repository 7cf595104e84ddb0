//! Department endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{Department, DepartmentPatch, EntityId, NewDepartment};

use crate::{ApiError, AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = [Department])
    )
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(state.read()?.get_departments()))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(("id" = EntityId, Path, description = "Department id")),
    responses(
        (status = 200, description = "The department", body = Department),
        (status = 404, description = "Department not found", body = ErrorBody)
    )
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Department>, ApiError> {
    state
        .read()?
        .get_department(id)
        .map(Json)
        .ok_or(ApiError::not_found("department"))
}

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = NewDepartment,
    responses(
        (status = 201, description = "Department created", body = Department),
        (status = 400, description = "Invalid body", body = ErrorBody)
    )
)]
pub async fn create_department(
    State(state): State<AppState>,
    payload: Result<Json<NewDepartment>, JsonRejection>,
) -> Result<(StatusCode, Json<Department>), ApiError> {
    let Json(new) = payload?;
    Ok((
        StatusCode::CREATED,
        Json(state.write()?.create_department(new)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(("id" = EntityId, Path, description = "Department id")),
    request_body = DepartmentPatch,
    responses(
        (status = 200, description = "Updated department", body = Department),
        (status = 404, description = "Department not found", body = ErrorBody)
    )
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<DepartmentPatch>, JsonRejection>,
) -> Result<Json<Department>, ApiError> {
    let Json(patch) = payload?;
    state
        .write()?
        .update_department(id, patch)
        .map(Json)
        .ok_or(ApiError::not_found("department"))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(("id" = EntityId, Path, description = "Department id")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 404, description = "Department not found", body = ErrorBody)
    )
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    if state.write()?.delete_department(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("department"))
    }
}
