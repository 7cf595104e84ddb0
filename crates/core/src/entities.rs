//! Entity rows, insert payloads, patch payloads and join views.
//!
//! Rows hold plain owned data. Insert payloads use the validated text types
//! from `hms-types` so that deserializing a request body is the schema check;
//! patch payloads carry every insert field as `Option`, where an omitted field
//! means "leave unchanged".

use chrono::{DateTime, NaiveDate, Utc};
use hms_types::{NonEmptyText, TcNo};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Process-local identifier, assigned by a per-collection monotonic counter.
/// Identifiers are never reused after deletion.
pub type EntityId = u32;

// ============================================================================
// Departments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub head_doctor_id: Option<EntityId>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewDepartment {
    #[schema(value_type = String)]
    pub name: NonEmptyText,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub head_doctor_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DepartmentPatch {
    #[schema(value_type = Option<String>)]
    pub name: Option<NonEmptyText>,
    pub description: Option<String>,
    pub head_doctor_id: Option<EntityId>,
}

// ============================================================================
// Doctors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub department_id: EntityId,
    pub phone: String,
    pub email: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewDoctor {
    #[schema(value_type = String)]
    pub first_name: NonEmptyText,
    #[schema(value_type = String)]
    pub last_name: NonEmptyText,
    #[schema(value_type = String)]
    pub specialization: NonEmptyText,
    /// Not checked against the department collection (known gap).
    pub department_id: EntityId,
    #[schema(value_type = String)]
    pub phone: NonEmptyText,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DoctorPatch {
    #[schema(value_type = Option<String>)]
    pub first_name: Option<NonEmptyText>,
    #[schema(value_type = Option<String>)]
    pub last_name: Option<NonEmptyText>,
    #[schema(value_type = Option<String>)]
    pub specialization: Option<NonEmptyText>,
    pub department_id: Option<EntityId>,
    #[schema(value_type = Option<String>)]
    pub phone: Option<NonEmptyText>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Patients
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub tc_no: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub phone: String,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    /// Stamped once at creation, never touched by updates.
    pub registration_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPatient {
    #[schema(value_type = String)]
    pub first_name: NonEmptyText,
    #[schema(value_type = String)]
    pub last_name: NonEmptyText,
    #[schema(value_type = String)]
    pub tc_no: TcNo,
    pub birth_date: NaiveDate,
    #[schema(value_type = String)]
    pub gender: NonEmptyText,
    #[schema(value_type = String)]
    pub phone: NonEmptyText,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PatientPatch {
    #[schema(value_type = Option<String>)]
    pub first_name: Option<NonEmptyText>,
    #[schema(value_type = Option<String>)]
    pub last_name: Option<NonEmptyText>,
    #[schema(value_type = Option<String>)]
    pub tc_no: Option<TcNo>,
    pub birth_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub gender: Option<NonEmptyText>,
    #[schema(value_type = Option<String>)]
    pub phone: Option<NonEmptyText>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}

// ============================================================================
// Appointments
// ============================================================================

/// The closed set of appointment states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    pub id: EntityId,
    pub patient_id: EntityId,
    pub doctor_id: EntityId,
    pub department_id: EntityId,
    pub appointment_date: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub complaint: Option<String>,
}

/// The doctor/department pair is deliberately not cross-checked: a doctor can
/// be booked under a department they do not belong to.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewAppointment {
    pub patient_id: EntityId,
    pub doctor_id: EntityId,
    pub department_id: EntityId,
    pub appointment_date: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub complaint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AppointmentPatch {
    pub patient_id: Option<EntityId>,
    pub doctor_id: Option<EntityId>,
    pub department_id: Option<EntityId>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
    pub complaint: Option<String>,
}

// ============================================================================
// Medical records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicalRecord {
    pub id: EntityId,
    pub patient_id: EntityId,
    pub doctor_id: EntityId,
    pub appointment_id: Option<EntityId>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub prescriptions: Option<String>,
    pub notes: Option<String>,
    /// Stamped once at creation.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewMedicalRecord {
    pub patient_id: EntityId,
    pub doctor_id: EntityId,
    #[serde(default)]
    pub appointment_id: Option<EntityId>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub prescriptions: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct MedicalRecordPatch {
    pub patient_id: Option<EntityId>,
    pub doctor_id: Option<EntityId>,
    pub appointment_id: Option<EntityId>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub prescriptions: Option<String>,
    pub notes: Option<String>,
}

// ============================================================================
// Users (demo auth table)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

// ============================================================================
// Join views
// ============================================================================

/// A doctor with its department row inlined, resolved at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorWithDepartment {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub department: Department,
}

/// An appointment with patient, doctor and department rows inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentWithDetails {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub patient: Patient,
    pub doctor: Doctor,
    pub department: Department,
}

/// A patient with their most recent appointment (by date, descending) and
/// total appointment count attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientWithLastAppointment {
    #[serde(flatten)]
    pub patient: Patient,
    pub last_appointment: Option<AppointmentWithDetails>,
    pub appointment_count: usize,
}

/// Dashboard snapshot, computed fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_patients: usize,
    pub today_appointments: usize,
    pub active_doctors: usize,
    pub total_departments: usize,
}
