//! Appointment endpoints.
//!
//! Date filters work on calendar days in local time; `/appointments/today`
//! resolves "today" at request time.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDate};
use hms_core::{
    Appointment, AppointmentPatch, AppointmentWithDetails, EntityId, NewAppointment,
};

use crate::{ApiError, AppState, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/appointments",
    responses(
        (status = 200, description = "All appointments with related rows", body = [AppointmentWithDetails]),
        (status = 500, description = "Dangling reference", body = ErrorBody)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentWithDetails>>, ApiError> {
    Ok(Json(state.read()?.get_appointments()?))
}

#[utoipa::path(
    get,
    path = "/api/appointments/today",
    responses(
        (status = 200, description = "Appointments on the current local day", body = [AppointmentWithDetails])
    )
)]
pub async fn today_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentWithDetails>>, ApiError> {
    let today = Local::now().date_naive();
    Ok(Json(state.read()?.get_appointments_by_date(today)?))
}

#[utoipa::path(
    get,
    path = "/api/appointments/date/{date}",
    params(("date" = String, Path, description = "Calendar day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Appointments on that day", body = [AppointmentWithDetails]),
        (status = 400, description = "Unparseable date", body = ErrorBody)
    )
)]
pub async fn list_appointments_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<AppointmentWithDetails>>, ApiError> {
    Ok(Json(state.read()?.get_appointments_by_date(date)?))
}

#[utoipa::path(
    get,
    path = "/api/appointments/patient/{patient_id}",
    params(("patient_id" = EntityId, Path, description = "Patient id")),
    responses(
        (status = 200, description = "The patient's appointments", body = [AppointmentWithDetails])
    )
)]
pub async fn list_appointments_by_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<EntityId>,
) -> Result<Json<Vec<AppointmentWithDetails>>, ApiError> {
    Ok(Json(state.read()?.get_appointments_by_patient(patient_id)?))
}

#[utoipa::path(
    get,
    path = "/api/appointments/doctor/{doctor_id}",
    params(("doctor_id" = EntityId, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "The doctor's appointments", body = [AppointmentWithDetails])
    )
)]
pub async fn list_appointments_by_doctor(
    State(state): State<AppState>,
    Path(doctor_id): Path<EntityId>,
) -> Result<Json<Vec<AppointmentWithDetails>>, ApiError> {
    Ok(Json(state.read()?.get_appointments_by_doctor(doctor_id)?))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    params(("id" = EntityId, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "The appointment with related rows", body = AppointmentWithDetails),
        (status = 404, description = "Appointment not found", body = ErrorBody)
    )
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<AppointmentWithDetails>, ApiError> {
    state
        .read()?
        .get_appointment(id)?
        .map(Json)
        .ok_or(ApiError::not_found("appointment"))
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = NewAppointment,
    responses(
        (status = 201, description = "Appointment created", body = Appointment),
        (status = 400, description = "Invalid body", body = ErrorBody)
    )
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    payload: Result<Json<NewAppointment>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let Json(new) = payload?;
    Ok((
        StatusCode::CREATED,
        Json(state.write()?.create_appointment(new)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    params(("id" = EntityId, Path, description = "Appointment id")),
    request_body = AppointmentPatch,
    responses(
        (status = 200, description = "Updated appointment", body = Appointment),
        (status = 404, description = "Appointment not found", body = ErrorBody)
    )
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<AppointmentPatch>, JsonRejection>,
) -> Result<Json<Appointment>, ApiError> {
    let Json(patch) = payload?;
    state
        .write()?
        .update_appointment(id, patch)
        .map(Json)
        .ok_or(ApiError::not_found("appointment"))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    params(("id" = EntityId, Path, description = "Appointment id")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found", body = ErrorBody)
    )
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError> {
    if state.write()?.delete_appointment(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("appointment"))
    }
}
