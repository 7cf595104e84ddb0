//! Fixed startup data: the six hospital departments and four staff doctors.
//!
//! Rows are built directly rather than through the insert payloads, the same
//! way the counters would have assigned them one by one.

use crate::entities::{Department, Doctor};
use crate::store::HospitalStore;

const DEPARTMENTS: &[(&str, &str)] = &[
    ("Kardiyoloji", "Kalp ve damar hastalıkları"),
    ("Nöroloji", "Sinir sistemi hastalıkları"),
    ("Dahiliye", "Genel iç hastalıkları"),
    ("Ortopedi", "Kemik ve eklem hastalıkları"),
    ("Pediatri", "Çocuk hastalıkları"),
    ("Acil Servis", "Acil müdahale servisi"),
];

const DOCTORS: &[(&str, &str, &str, u32, &str, &str)] = &[
    (
        "Ayşe",
        "Tanır",
        "Kardiyolog",
        1,
        "0532 123 45 67",
        "ayse.tanir@hospital.com",
    ),
    (
        "Mehmet",
        "Öz",
        "Nörolog",
        2,
        "0532 123 45 68",
        "mehmet.oz@hospital.com",
    ),
    (
        "Elif",
        "Kaya",
        "Dahiliye Uzmanı",
        3,
        "0532 123 45 69",
        "elif.kaya@hospital.com",
    ),
    (
        "Can",
        "Usta",
        "Ortopedist",
        4,
        "0532 123 45 70",
        "can.usta@hospital.com",
    ),
];

pub(crate) fn populate(store: &mut HospitalStore) {
    for (name, description) in DEPARTMENTS {
        let id = store.next_department_id;
        store.next_department_id += 1;
        store.departments.insert(
            id,
            Department {
                id,
                name: (*name).into(),
                description: Some((*description).into()),
                head_doctor_id: None,
            },
        );
    }

    for (first_name, last_name, specialization, department_id, phone, email) in DOCTORS {
        let id = store.next_doctor_id;
        store.next_doctor_id += 1;
        store.doctors.insert(
            id,
            Doctor {
                id,
                first_name: (*first_name).into(),
                last_name: (*last_name).into(),
                specialization: (*specialization).into(),
                department_id: *department_id,
                phone: (*phone).into(),
                email: Some((*email).into()),
                is_active: true,
            },
        );
    }

    tracing::debug!(
        departments = store.departments.len(),
        doctors = store.doctors.len(),
        "seeded sample data"
    );
}
