//! The in-memory relational store.
//!
//! One `HospitalStore` instance owns every collection, keyed by per-collection
//! auto-incrementing ids. Denormalized reads resolve references at call time;
//! a reference whose target row has been deleted yields
//! [`StoreError::MissingReference`](crate::StoreError) rather than a panic.
//!
//! Deletes are unrestricted: nothing cascades and nothing is blocked, so the
//! store can hold dangling references. Uniqueness of a patient's `tc_no` is a
//! business rule of the API layer, not of this store.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::entities::*;
use crate::{StoreError, StoreResult};

/// Authoritative owner of all entity collections.
///
/// Construct one instance at startup and share it behind the process's chosen
/// synchronization primitive; the store itself performs no locking.
#[derive(Debug)]
pub struct HospitalStore {
    pub(crate) users: HashMap<String, User>,
    pub(crate) departments: BTreeMap<EntityId, Department>,
    pub(crate) doctors: BTreeMap<EntityId, Doctor>,
    pub(crate) patients: BTreeMap<EntityId, Patient>,
    pub(crate) appointments: BTreeMap<EntityId, Appointment>,
    pub(crate) medical_records: BTreeMap<EntityId, MedicalRecord>,
    pub(crate) next_department_id: EntityId,
    pub(crate) next_doctor_id: EntityId,
    pub(crate) next_patient_id: EntityId,
    pub(crate) next_appointment_id: EntityId,
    pub(crate) next_medical_record_id: EntityId,
}

fn next_id(counter: &mut EntityId) -> EntityId {
    let id = *counter;
    *counter += 1;
    id
}

/// Calendar day of a timestamp in the local timezone.
fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

impl HospitalStore {
    /// Creates a store pre-populated with the sample departments and doctors.
    pub fn new() -> Self {
        let mut store = Self::empty();
        crate::seed::populate(&mut store);
        store
    }

    /// Creates a store with no rows at all. Counters start at 1.
    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
            departments: BTreeMap::new(),
            doctors: BTreeMap::new(),
            patients: BTreeMap::new(),
            appointments: BTreeMap::new(),
            medical_records: BTreeMap::new(),
            next_department_id: 1,
            next_doctor_id: 1,
            next_patient_id: 1,
            next_appointment_id: 1,
            next_medical_record_id: 1,
        }
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    /// Inserts or refreshes a user row. An existing row keeps its original
    /// `created_at`; `updated_at` is always refreshed.
    pub fn upsert_user(&mut self, user: UpsertUser) -> User {
        let now = Utc::now();
        let created_at = self
            .users
            .get(&user.id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);
        let row = User {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: user.profile_image_url,
            created_at,
            updated_at: now,
        };
        self.users.insert(row.id.clone(), row.clone());
        row
    }

    // ------------------------------------------------------------------
    // Departments
    // ------------------------------------------------------------------

    pub fn get_departments(&self) -> Vec<Department> {
        self.departments.values().cloned().collect()
    }

    pub fn get_department(&self, id: EntityId) -> Option<Department> {
        self.departments.get(&id).cloned()
    }

    pub fn create_department(&mut self, new: NewDepartment) -> Department {
        let id = next_id(&mut self.next_department_id);
        let row = Department {
            id,
            name: new.name.into_inner(),
            description: new.description,
            head_doctor_id: new.head_doctor_id,
        };
        self.departments.insert(id, row.clone());
        row
    }

    pub fn update_department(&mut self, id: EntityId, patch: DepartmentPatch) -> Option<Department> {
        let row = self.departments.get_mut(&id)?;
        if let Some(name) = patch.name {
            row.name = name.into_inner();
        }
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        if let Some(head_doctor_id) = patch.head_doctor_id {
            row.head_doctor_id = Some(head_doctor_id);
        }
        Some(row.clone())
    }

    pub fn delete_department(&mut self, id: EntityId) -> bool {
        self.departments.remove(&id).is_some()
    }

    // ------------------------------------------------------------------
    // Doctors
    // ------------------------------------------------------------------

    fn department_ref(&self, id: EntityId) -> StoreResult<Department> {
        self.departments
            .get(&id)
            .cloned()
            .ok_or(StoreError::MissingReference {
                entity: "department",
                id,
            })
    }

    fn doctor_ref(&self, id: EntityId) -> StoreResult<Doctor> {
        self.doctors
            .get(&id)
            .cloned()
            .ok_or(StoreError::MissingReference {
                entity: "doctor",
                id,
            })
    }

    fn patient_ref(&self, id: EntityId) -> StoreResult<Patient> {
        self.patients
            .get(&id)
            .cloned()
            .ok_or(StoreError::MissingReference {
                entity: "patient",
                id,
            })
    }

    fn doctor_with_department(&self, doctor: &Doctor) -> StoreResult<DoctorWithDepartment> {
        Ok(DoctorWithDepartment {
            doctor: doctor.clone(),
            department: self.department_ref(doctor.department_id)?,
        })
    }

    pub fn get_doctors(&self) -> StoreResult<Vec<DoctorWithDepartment>> {
        self.doctors
            .values()
            .map(|doctor| self.doctor_with_department(doctor))
            .collect()
    }

    pub fn get_doctor(&self, id: EntityId) -> StoreResult<Option<DoctorWithDepartment>> {
        match self.doctors.get(&id) {
            Some(doctor) => Ok(Some(self.doctor_with_department(doctor)?)),
            None => Ok(None),
        }
    }

    pub fn get_doctors_by_department(
        &self,
        department_id: EntityId,
    ) -> StoreResult<Vec<DoctorWithDepartment>> {
        self.doctors
            .values()
            .filter(|doctor| doctor.department_id == department_id)
            .map(|doctor| self.doctor_with_department(doctor))
            .collect()
    }

    /// The `department_id` is not checked against the department collection.
    pub fn create_doctor(&mut self, new: NewDoctor) -> Doctor {
        let id = next_id(&mut self.next_doctor_id);
        let row = Doctor {
            id,
            first_name: new.first_name.into_inner(),
            last_name: new.last_name.into_inner(),
            specialization: new.specialization.into_inner(),
            department_id: new.department_id,
            phone: new.phone.into_inner(),
            email: new.email,
            is_active: new.is_active,
        };
        self.doctors.insert(id, row.clone());
        row
    }

    pub fn update_doctor(&mut self, id: EntityId, patch: DoctorPatch) -> Option<Doctor> {
        let row = self.doctors.get_mut(&id)?;
        if let Some(first_name) = patch.first_name {
            row.first_name = first_name.into_inner();
        }
        if let Some(last_name) = patch.last_name {
            row.last_name = last_name.into_inner();
        }
        if let Some(specialization) = patch.specialization {
            row.specialization = specialization.into_inner();
        }
        if let Some(department_id) = patch.department_id {
            row.department_id = department_id;
        }
        if let Some(phone) = patch.phone {
            row.phone = phone.into_inner();
        }
        if let Some(email) = patch.email {
            row.email = Some(email);
        }
        if let Some(is_active) = patch.is_active {
            row.is_active = is_active;
        }
        Some(row.clone())
    }

    pub fn delete_doctor(&mut self, id: EntityId) -> bool {
        self.doctors.remove(&id).is_some()
    }

    // ------------------------------------------------------------------
    // Patients
    // ------------------------------------------------------------------

    pub fn get_patients(&self) -> StoreResult<Vec<PatientWithLastAppointment>> {
        self.patients
            .values()
            .map(|patient| {
                let mut own: Vec<&Appointment> = self
                    .appointments
                    .values()
                    .filter(|apt| apt.patient_id == patient.id)
                    .collect();
                own.sort_by(|a, b| b.appointment_date.cmp(&a.appointment_date));

                let last_appointment = match own.first() {
                    Some(apt) => Some(self.appointment_with_details(apt)?),
                    None => None,
                };

                Ok(PatientWithLastAppointment {
                    patient: patient.clone(),
                    last_appointment,
                    appointment_count: own.len(),
                })
            })
            .collect()
    }

    pub fn get_patient(&self, id: EntityId) -> Option<Patient> {
        self.patients.get(&id).cloned()
    }

    /// Linear scan for an exact `tc_no` match. The API layer uses this as its
    /// duplicate pre-check before inserting a patient.
    pub fn get_patient_by_tc_no(&self, tc_no: &str) -> Option<Patient> {
        self.patients
            .values()
            .find(|patient| patient.tc_no == tc_no)
            .cloned()
    }

    /// Case-insensitive substring match on first/last name; plain substring
    /// match on `tc_no` and phone.
    pub fn search_patients(&self, query: &str) -> Vec<Patient> {
        let lowered = query.to_lowercase();
        self.patients
            .values()
            .filter(|patient| {
                patient.first_name.to_lowercase().contains(&lowered)
                    || patient.last_name.to_lowercase().contains(&lowered)
                    || patient.tc_no.contains(query)
                    || patient.phone.contains(query)
            })
            .cloned()
            .collect()
    }

    pub fn create_patient(&mut self, new: NewPatient) -> Patient {
        let id = next_id(&mut self.next_patient_id);
        let row = Patient {
            id,
            first_name: new.first_name.into_inner(),
            last_name: new.last_name.into_inner(),
            tc_no: new.tc_no.into_inner(),
            birth_date: new.birth_date,
            gender: new.gender.into_inner(),
            phone: new.phone.into_inner(),
            address: new.address,
            emergency_contact: new.emergency_contact,
            registration_date: Utc::now(),
        };
        self.patients.insert(id, row.clone());
        row
    }

    pub fn update_patient(&mut self, id: EntityId, patch: PatientPatch) -> Option<Patient> {
        let row = self.patients.get_mut(&id)?;
        if let Some(first_name) = patch.first_name {
            row.first_name = first_name.into_inner();
        }
        if let Some(last_name) = patch.last_name {
            row.last_name = last_name.into_inner();
        }
        if let Some(tc_no) = patch.tc_no {
            row.tc_no = tc_no.into_inner();
        }
        if let Some(birth_date) = patch.birth_date {
            row.birth_date = birth_date;
        }
        if let Some(gender) = patch.gender {
            row.gender = gender.into_inner();
        }
        if let Some(phone) = patch.phone {
            row.phone = phone.into_inner();
        }
        if let Some(address) = patch.address {
            row.address = Some(address);
        }
        if let Some(emergency_contact) = patch.emergency_contact {
            row.emergency_contact = Some(emergency_contact);
        }
        Some(row.clone())
    }

    pub fn delete_patient(&mut self, id: EntityId) -> bool {
        self.patients.remove(&id).is_some()
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    fn appointment_with_details(
        &self,
        appointment: &Appointment,
    ) -> StoreResult<AppointmentWithDetails> {
        Ok(AppointmentWithDetails {
            appointment: appointment.clone(),
            patient: self.patient_ref(appointment.patient_id)?,
            doctor: self.doctor_ref(appointment.doctor_id)?,
            department: self.department_ref(appointment.department_id)?,
        })
    }

    pub fn get_appointments(&self) -> StoreResult<Vec<AppointmentWithDetails>> {
        self.appointments
            .values()
            .map(|apt| self.appointment_with_details(apt))
            .collect()
    }

    pub fn get_appointment(&self, id: EntityId) -> StoreResult<Option<AppointmentWithDetails>> {
        match self.appointments.get(&id) {
            Some(apt) => Ok(Some(self.appointment_with_details(apt)?)),
            None => Ok(None),
        }
    }

    /// Appointments whose timestamp falls on the given calendar day in local
    /// time, ignoring the time-of-day component.
    pub fn get_appointments_by_date(
        &self,
        date: NaiveDate,
    ) -> StoreResult<Vec<AppointmentWithDetails>> {
        self.appointments
            .values()
            .filter(|apt| local_day(apt.appointment_date) == date)
            .map(|apt| self.appointment_with_details(apt))
            .collect()
    }

    pub fn get_appointments_by_patient(
        &self,
        patient_id: EntityId,
    ) -> StoreResult<Vec<AppointmentWithDetails>> {
        self.appointments
            .values()
            .filter(|apt| apt.patient_id == patient_id)
            .map(|apt| self.appointment_with_details(apt))
            .collect()
    }

    pub fn get_appointments_by_doctor(
        &self,
        doctor_id: EntityId,
    ) -> StoreResult<Vec<AppointmentWithDetails>> {
        self.appointments
            .values()
            .filter(|apt| apt.doctor_id == doctor_id)
            .map(|apt| self.appointment_with_details(apt))
            .collect()
    }

    /// References are stored as given; none of the three ids is validated for
    /// existence or cross-consistency.
    pub fn create_appointment(&mut self, new: NewAppointment) -> Appointment {
        let id = next_id(&mut self.next_appointment_id);
        let row = Appointment {
            id,
            patient_id: new.patient_id,
            doctor_id: new.doctor_id,
            department_id: new.department_id,
            appointment_date: new.appointment_date,
            status: new.status,
            notes: new.notes,
            complaint: new.complaint,
        };
        self.appointments.insert(id, row.clone());
        row
    }

    pub fn update_appointment(
        &mut self,
        id: EntityId,
        patch: AppointmentPatch,
    ) -> Option<Appointment> {
        let row = self.appointments.get_mut(&id)?;
        if let Some(patient_id) = patch.patient_id {
            row.patient_id = patient_id;
        }
        if let Some(doctor_id) = patch.doctor_id {
            row.doctor_id = doctor_id;
        }
        if let Some(department_id) = patch.department_id {
            row.department_id = department_id;
        }
        if let Some(appointment_date) = patch.appointment_date {
            row.appointment_date = appointment_date;
        }
        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(notes) = patch.notes {
            row.notes = Some(notes);
        }
        if let Some(complaint) = patch.complaint {
            row.complaint = Some(complaint);
        }
        Some(row.clone())
    }

    pub fn delete_appointment(&mut self, id: EntityId) -> bool {
        self.appointments.remove(&id).is_some()
    }

    // ------------------------------------------------------------------
    // Medical records
    // ------------------------------------------------------------------

    pub fn get_medical_records(&self) -> Vec<MedicalRecord> {
        self.medical_records.values().cloned().collect()
    }

    pub fn get_medical_record(&self, id: EntityId) -> Option<MedicalRecord> {
        self.medical_records.get(&id).cloned()
    }

    pub fn get_medical_records_by_patient(&self, patient_id: EntityId) -> Vec<MedicalRecord> {
        self.medical_records
            .values()
            .filter(|record| record.patient_id == patient_id)
            .cloned()
            .collect()
    }

    pub fn create_medical_record(&mut self, new: NewMedicalRecord) -> MedicalRecord {
        let id = next_id(&mut self.next_medical_record_id);
        let row = MedicalRecord {
            id,
            patient_id: new.patient_id,
            doctor_id: new.doctor_id,
            appointment_id: new.appointment_id,
            diagnosis: new.diagnosis,
            treatment: new.treatment,
            prescriptions: new.prescriptions,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.medical_records.insert(id, row.clone());
        row
    }

    pub fn update_medical_record(
        &mut self,
        id: EntityId,
        patch: MedicalRecordPatch,
    ) -> Option<MedicalRecord> {
        let row = self.medical_records.get_mut(&id)?;
        if let Some(patient_id) = patch.patient_id {
            row.patient_id = patient_id;
        }
        if let Some(doctor_id) = patch.doctor_id {
            row.doctor_id = doctor_id;
        }
        if let Some(appointment_id) = patch.appointment_id {
            row.appointment_id = Some(appointment_id);
        }
        if let Some(diagnosis) = patch.diagnosis {
            row.diagnosis = Some(diagnosis);
        }
        if let Some(treatment) = patch.treatment {
            row.treatment = Some(treatment);
        }
        if let Some(prescriptions) = patch.prescriptions {
            row.prescriptions = Some(prescriptions);
        }
        if let Some(notes) = patch.notes {
            row.notes = Some(notes);
        }
        Some(row.clone())
    }

    pub fn delete_medical_record(&mut self, id: EntityId) -> bool {
        self.medical_records.remove(&id).is_some()
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    /// Snapshot of dashboard counters, recomputed on every call.
    pub fn get_statistics(&self) -> Statistics {
        let today = Local::now().date_naive();
        Statistics {
            total_patients: self.patients.len(),
            today_appointments: self
                .appointments
                .values()
                .filter(|apt| local_day(apt.appointment_date) == today)
                .count(),
            active_doctors: self.doctors.values().filter(|d| d.is_active).count(),
            total_departments: self.departments.len(),
        }
    }
}

impl Default for HospitalStore {
    /// Same as [`HospitalStore::new`]: seeded with the sample data.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hms_types::{NonEmptyText, TcNo};

    fn text(s: &str) -> NonEmptyText {
        NonEmptyText::new(s).unwrap()
    }

    fn department(name: &str) -> NewDepartment {
        NewDepartment {
            name: text(name),
            description: None,
            head_doctor_id: None,
        }
    }

    fn doctor(department_id: EntityId) -> NewDoctor {
        NewDoctor {
            first_name: text("Ayşe"),
            last_name: text("Tanır"),
            specialization: text("Kardiyolog"),
            department_id,
            phone: text("0532 123 45 67"),
            email: Some("ayse.tanir@hospital.com".into()),
            is_active: true,
        }
    }

    fn patient(tc_no: &str) -> NewPatient {
        NewPatient {
            first_name: text("Mehmet"),
            last_name: text("Yılmaz"),
            tc_no: TcNo::new(tc_no).unwrap(),
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 12).unwrap(),
            gender: text("male"),
            phone: text("0555 111 22 33"),
            address: None,
            emergency_contact: None,
        }
    }

    fn appointment(
        patient_id: EntityId,
        doctor_id: EntityId,
        department_id: EntityId,
        date: DateTime<Utc>,
    ) -> NewAppointment {
        NewAppointment {
            patient_id,
            doctor_id,
            department_id,
            appointment_date: date,
            status: AppointmentStatus::Scheduled,
            notes: None,
            complaint: None,
        }
    }

    /// A timestamp on the given local calendar day, so local-day filtering is
    /// stable regardless of the timezone the tests run in.
    fn on_local_day(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn ids_are_unique_and_strictly_increasing() {
        let mut store = HospitalStore::empty();
        let a = store.create_department(department("Kardiyoloji"));
        let b = store.create_department(department("Nöroloji"));
        assert!(b.id > a.id);

        // Deleting never frees an id for reuse.
        assert!(store.delete_department(b.id));
        let c = store.create_department(department("Dahiliye"));
        assert!(c.id > b.id);
    }

    #[test]
    fn partial_update_leaves_omitted_fields_untouched() {
        let mut store = HospitalStore::empty();
        let dept = store.create_department(NewDepartment {
            name: text("Kardiyoloji"),
            description: Some("Kalp ve damar hastalıkları".into()),
            head_doctor_id: None,
        });

        let updated = store
            .update_department(
                dept.id,
                DepartmentPatch {
                    name: Some(text("Kardiyoloji ve Damar")),
                    ..DepartmentPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Kardiyoloji ve Damar");
        assert_eq!(
            updated.description.as_deref(),
            Some("Kalp ve damar hastalıkları")
        );
    }

    #[test]
    fn update_of_absent_id_returns_none_and_creates_nothing() {
        let mut store = HospitalStore::empty();
        assert!(store
            .update_patient(42, PatientPatch::default())
            .is_none());
        assert!(store.get_patients().unwrap().is_empty());
    }

    #[test]
    fn delete_returns_true_exactly_once() {
        let mut store = HospitalStore::empty();
        let p = store.create_patient(patient("12345678901"));
        assert!(store.delete_patient(p.id));
        assert!(!store.delete_patient(p.id));
    }

    #[test]
    fn registration_date_survives_updates() {
        let mut store = HospitalStore::empty();
        let created = store.create_patient(patient("12345678901"));
        let updated = store
            .update_patient(
                created.id,
                PatientPatch {
                    phone: Some(text("0555 999 88 77")),
                    ..PatientPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.registration_date, created.registration_date);
        assert_eq!(updated.tc_no, created.tc_no);
    }

    #[test]
    fn tc_no_lookup_finds_exact_match_only() {
        let mut store = HospitalStore::empty();
        store.create_patient(patient("12345678901"));
        assert!(store.get_patient_by_tc_no("12345678901").is_some());
        assert!(store.get_patient_by_tc_no("12345678902").is_none());
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let mut store = HospitalStore::empty();
        store.create_patient(patient("12345678901"));

        assert_eq!(store.search_patients("mehmet").len(), 1);
        assert_eq!(store.search_patients("MEHMET").len(), 1);
        assert_eq!(store.search_patients("MAZ").len(), 1);
        // ASCII "YIL" lowercases to "yil", which does not match the dotless ı
        // in "Yılmaz"; matching is plain lowercase folding, not locale-aware
        assert!(store.search_patients("YIL").is_empty());
        // tc_no and phone are plain substring matches
        assert_eq!(store.search_patients("4567890").len(), 1);
        assert_eq!(store.search_patients("111 22").len(), 1);
        assert!(store.search_patients("nobody").is_empty());
    }

    #[test]
    fn appointments_filter_by_calendar_day() {
        let mut store = HospitalStore::empty();
        let dept = store.create_department(department("Kardiyoloji"));
        let doc = store.create_doctor(doctor(dept.id));
        let pat = store.create_patient(patient("12345678901"));

        let morning = on_local_day(2024, 3, 15, 9);
        let evening = on_local_day(2024, 3, 15, 18);
        let next_day = on_local_day(2024, 3, 16, 9);
        store.create_appointment(appointment(pat.id, doc.id, dept.id, morning));
        store.create_appointment(appointment(pat.id, doc.id, dept.id, evening));
        store.create_appointment(appointment(pat.id, doc.id, dept.id, next_day));

        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let found = store.get_appointments_by_date(day).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found
            .iter()
            .all(|apt| local_day(apt.appointment.appointment_date) == day));
    }

    #[test]
    fn patient_view_attaches_latest_appointment_and_count() {
        let mut store = HospitalStore::empty();
        let dept = store.create_department(department("Kardiyoloji"));
        let doc = store.create_doctor(doctor(dept.id));
        let pat = store.create_patient(patient("12345678901"));

        store.create_appointment(appointment(
            pat.id,
            doc.id,
            dept.id,
            on_local_day(2024, 3, 10, 9),
        ));
        let latest = store.create_appointment(appointment(
            pat.id,
            doc.id,
            dept.id,
            on_local_day(2024, 3, 20, 9),
        ));

        let views = store.get_patients().unwrap();
        assert_eq!(views.len(), 1);
        let view = &views[0];
        assert_eq!(view.appointment_count, 2);
        assert_eq!(
            view.last_appointment.as_ref().map(|apt| apt.appointment.id),
            Some(latest.id)
        );
    }

    #[test]
    fn dangling_department_surfaces_as_missing_reference() {
        let mut store = HospitalStore::empty();
        let dept = store.create_department(department("Kardiyoloji"));
        let doc = store.create_doctor(doctor(dept.id));

        // Unrestricted delete leaves the doctor's reference dangling.
        assert!(store.delete_department(dept.id));

        match store.get_doctors() {
            Err(StoreError::MissingReference { entity, id }) => {
                assert_eq!(entity, "department");
                assert_eq!(id, dept.id);
            }
            other => panic!("expected MissingReference, got {other:?}"),
        }
        assert!(store.get_doctor(doc.id).is_err());
    }

    #[test]
    fn statistics_count_fresh_on_each_call() {
        let mut store = HospitalStore::empty();
        let dept = store.create_department(department("Kardiyoloji"));
        let doc = store.create_doctor(doctor(dept.id));
        let pat = store.create_patient(patient("12345678901"));

        let now = Utc::now();
        store.create_appointment(appointment(pat.id, doc.id, dept.id, now));

        let stats = store.get_statistics();
        assert_eq!(
            stats,
            Statistics {
                total_patients: 1,
                today_appointments: 1,
                active_doctors: 1,
                total_departments: 1,
            }
        );

        // An inactive doctor no longer counts.
        store
            .update_doctor(
                doc.id,
                DoctorPatch {
                    is_active: Some(false),
                    ..DoctorPatch::default()
                },
            )
            .unwrap();
        assert_eq!(store.get_statistics().active_doctors, 0);
    }

    #[test]
    fn seeded_store_holds_sample_departments_and_doctors() {
        let store = HospitalStore::new();
        let departments = store.get_departments();
        assert_eq!(departments.len(), 6);
        assert_eq!(departments[0].name, "Kardiyoloji");

        let doctors = store.get_doctors().unwrap();
        assert_eq!(doctors.len(), 4);
        assert!(doctors.iter().all(|d| d.doctor.is_active));
        // Seeded doctors resolve their seeded departments.
        assert_eq!(doctors[0].department.name, "Kardiyoloji");
    }

    #[test]
    fn upsert_user_preserves_created_at() {
        let mut store = HospitalStore::empty();
        let first = store.upsert_user(UpsertUser {
            id: "demo".into(),
            email: Some("demo@hospital.local".into()),
            first_name: None,
            last_name: None,
            profile_image_url: None,
        });
        let second = store.upsert_user(UpsertUser {
            id: "demo".into(),
            email: Some("demo@hospital.local".into()),
            first_name: Some("Demo".into()),
            last_name: None,
            profile_image_url: None,
        });
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(
            store.get_user("demo").unwrap().first_name.as_deref(),
            Some("Demo")
        );
    }
}
