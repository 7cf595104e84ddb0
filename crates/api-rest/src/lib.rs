//! # API REST
//!
//! REST surface for the hospital administration service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - Request-body validation via typed deserialization
//! - Mapping store results to JSON responses and status codes
//! - OpenAPI/Swagger documentation
//!
//! All state lives in a single [`HospitalStore`] owned by the process entry
//! point and shared with handlers through [`AppState`].

#![warn(rust_2018_idioms)]

pub mod error;
pub mod routes;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::routing::get;
use axum::Router;
use hms_core::{
    Appointment, AppointmentPatch, AppointmentStatus, AppointmentWithDetails, Department,
    DepartmentPatch, Doctor, DoctorPatch, DoctorWithDepartment, HospitalStore, MedicalRecord,
    MedicalRecordPatch, NewAppointment, NewDepartment, NewDoctor, NewMedicalRecord, NewPatient,
    Patient, PatientPatch, PatientWithLastAppointment, Statistics, User,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::{ApiError, ErrorBody};

/// Identifier of the static demo-credential user upserted at startup.
pub const DEMO_USER_ID: &str = "demo-user";

/// Application state shared across REST API handlers.
///
/// Owns the store behind an `RwLock`; the store itself performs no locking.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<HospitalStore>>,
}

impl AppState {
    pub fn new(store: HospitalStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, HospitalStore>, ApiError> {
        self.store
            .read()
            .map_err(|_| ApiError::internal("store lock poisoned"))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, HospitalStore>, ApiError> {
        self.store
            .write()
            .map_err(|_| ApiError::internal("store lock poisoned"))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::departments::list_departments,
        routes::departments::get_department,
        routes::departments::create_department,
        routes::departments::update_department,
        routes::departments::delete_department,
        routes::doctors::list_doctors,
        routes::doctors::get_doctor,
        routes::doctors::list_doctors_by_department,
        routes::doctors::create_doctor,
        routes::doctors::update_doctor,
        routes::doctors::delete_doctor,
        routes::patients::list_patients,
        routes::patients::search_patients,
        routes::patients::get_patient,
        routes::patients::create_patient,
        routes::patients::update_patient,
        routes::patients::delete_patient,
        routes::appointments::list_appointments,
        routes::appointments::today_appointments,
        routes::appointments::list_appointments_by_date,
        routes::appointments::list_appointments_by_patient,
        routes::appointments::list_appointments_by_doctor,
        routes::appointments::get_appointment,
        routes::appointments::create_appointment,
        routes::appointments::update_appointment,
        routes::appointments::delete_appointment,
        routes::records::list_medical_records,
        routes::records::list_medical_records_by_patient,
        routes::records::get_medical_record,
        routes::records::create_medical_record,
        routes::records::update_medical_record,
        routes::records::delete_medical_record,
        routes::stats::get_statistics,
        routes::auth::current_user,
    ),
    components(schemas(
        Department,
        NewDepartment,
        DepartmentPatch,
        Doctor,
        NewDoctor,
        DoctorPatch,
        DoctorWithDepartment,
        Patient,
        NewPatient,
        PatientPatch,
        PatientWithLastAppointment,
        Appointment,
        NewAppointment,
        AppointmentPatch,
        AppointmentStatus,
        AppointmentWithDetails,
        MedicalRecord,
        NewMedicalRecord,
        MedicalRecordPatch,
        Statistics,
        User,
        ErrorBody,
    ))
)]
pub struct ApiDoc;

/// Builds the full application router: `/api` resources, Swagger UI and
/// permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    use routes::*;

    Router::new()
        .route(
            "/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/departments/:id",
            get(departments::get_department)
                .put(departments::update_department)
                .delete(departments::delete_department),
        )
        .route(
            "/doctors",
            get(doctors::list_doctors).post(doctors::create_doctor),
        )
        .route(
            "/doctors/department/:department_id",
            get(doctors::list_doctors_by_department),
        )
        .route(
            "/doctors/:id",
            get(doctors::get_doctor)
                .put(doctors::update_doctor)
                .delete(doctors::delete_doctor),
        )
        .route(
            "/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route("/patients/search", get(patients::search_patients))
        .route(
            "/patients/:id",
            get(patients::get_patient)
                .put(patients::update_patient)
                .delete(patients::delete_patient),
        )
        .route(
            "/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route("/appointments/today", get(appointments::today_appointments))
        .route(
            "/appointments/date/:date",
            get(appointments::list_appointments_by_date),
        )
        .route(
            "/appointments/patient/:patient_id",
            get(appointments::list_appointments_by_patient),
        )
        .route(
            "/appointments/doctor/:doctor_id",
            get(appointments::list_appointments_by_doctor),
        )
        .route(
            "/appointments/:id",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        )
        .route(
            "/medical-records",
            get(records::list_medical_records).post(records::create_medical_record),
        )
        .route(
            "/medical-records/patient/:patient_id",
            get(records::list_medical_records_by_patient),
        )
        .route(
            "/medical-records/:id",
            get(records::get_medical_record)
                .put(records::update_medical_record)
                .delete(records::delete_medical_record),
        )
        .route("/statistics", get(stats::get_statistics))
        .route("/auth/user", get(auth::current_user))
}
