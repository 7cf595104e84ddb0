//! End-to-end tests driving the router in-process.

use api_rest::{app, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Local, TimeZone, Utc};
use hms_core::HospitalStore;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn blank_app() -> Router {
    app(AppState::new(HospitalStore::empty()))
}

fn seeded_app() -> Router {
    app(AppState::new(HospitalStore::new()))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PUT", uri, Some(body)).await
}

fn patient_body(tc_no: &str) -> Value {
    json!({
        "first_name": "Mehmet",
        "last_name": "Yılmaz",
        "tc_no": tc_no,
        "birth_date": "1980-05-12",
        "gender": "male",
        "phone": "0555 111 22 33"
    })
}

#[tokio::test]
async fn seed_data_is_visible() {
    let app = seeded_app();

    let (status, body) = get(&app, "/api/departments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[0]["name"], "Kardiyoloji");

    let (status, body) = get(&app, "/api/doctors").await;
    assert_eq!(status, StatusCode::OK);
    let doctors = body.as_array().unwrap();
    assert_eq!(doctors.len(), 4);
    // join view embeds the department row
    assert_eq!(doctors[0]["department"]["name"], "Kardiyoloji");
}

#[tokio::test]
async fn booking_flow_shows_up_in_today_and_statistics() {
    let app = blank_app();

    let (status, dept) = post(
        &app,
        "/api/departments",
        json!({ "name": "Kardiyoloji", "description": "Kalp ve damar hastalıkları" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, doctor) = post(
        &app,
        "/api/doctors",
        json!({
            "first_name": "Ayşe",
            "last_name": "Tanır",
            "specialization": "Kardiyolog",
            "department_id": dept["id"],
            "phone": "0532 123 45 67"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(doctor["is_active"], true); // defaulted

    let (status, patient) = post(&app, "/api/patients", patient_body("12345678901")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, appointment) = post(
        &app,
        "/api/appointments",
        json!({
            "patient_id": patient["id"],
            "doctor_id": doctor["id"],
            "department_id": dept["id"],
            "appointment_date": Utc::now().to_rfc3339(),
            "status": "scheduled",
            "complaint": "Göğüs ağrısı"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/appointments/today").await;
    assert_eq!(status, StatusCode::OK);
    let today = body.as_array().unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0]["id"], appointment["id"]);
    assert_eq!(today[0]["patient"]["tc_no"], "12345678901");

    let (status, stats) = get(&app, "/api/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "totalPatients": 1,
            "todayAppointments": 1,
            "activeDoctors": 1,
            "totalDepartments": 1
        })
    );
}

#[tokio::test]
async fn duplicate_tc_no_is_rejected() {
    let app = blank_app();

    let (status, _) = post(&app, "/api/patients", patient_body("12345678901")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/api/patients", patient_body("12345678901")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("tc_no"));

    let (_, patients) = get(&app, "/api/patients").await;
    assert_eq!(patients.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn status_only_update_leaves_other_fields_alone() {
    let app = seeded_app();

    let (_, patient) = post(&app, "/api/patients", patient_body("12345678901")).await;
    let (status, created) = post(
        &app,
        "/api/appointments",
        json!({
            "patient_id": patient["id"],
            "doctor_id": 1,
            "department_id": 1,
            "appointment_date": "2024-03-15T09:30:00Z",
            "status": "scheduled"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/appointments/{}", created["id"]);
    let (status, updated) = put(&app, &uri, json!({ "status": "completed" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["patient_id"], created["patient_id"]);
    assert_eq!(updated["doctor_id"], created["doctor_id"]);
    assert_eq!(updated["department_id"], created["department_id"]);
    assert_eq!(updated["appointment_date"], created["appointment_date"]);
}

#[tokio::test]
async fn invalid_bodies_yield_field_errors() {
    let app = blank_app();

    // tc_no fails the 11-digit rule
    let (status, body) = post(&app, "/api/patients", patient_body("123")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request body");
    assert!(!body["errors"].as_array().unwrap().is_empty());

    // unknown appointment status tag
    let (status, _) = post(
        &app,
        "/api/appointments",
        json!({
            "patient_id": 1,
            "doctor_id": 1,
            "department_id": 1,
            "appointment_date": "2024-03-15T09:30:00Z",
            "status": "postponed"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_rows_map_to_not_found() {
    let app = blank_app();

    let (status, _) = get(&app, "/api/departments/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = put(&app, "/api/patients/999", json!({ "phone": "0" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the failed update must not have created a row
    let (_, patients) = get(&app, "/api/patients").await;
    assert!(patients.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_requires_and_uses_query() {
    let app = blank_app();
    let _ = post(&app, "/api/patients", patient_body("12345678901")).await;

    let (status, _) = get(&app, "/api/patients/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/api/patients/search?q=mehmet").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/api/patients/search?q=nobody").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn date_filter_matches_calendar_day() {
    let app = seeded_app();
    let (_, patient) = post(&app, "/api/patients", patient_body("12345678901")).await;

    // timestamp chosen on a local calendar day so the filter is TZ-stable
    let on_day = Local
        .with_ymd_and_hms(2024, 3, 15, 18, 30, 0)
        .unwrap()
        .with_timezone(&Utc);
    post(
        &app,
        "/api/appointments",
        json!({
            "patient_id": patient["id"],
            "doctor_id": 1,
            "department_id": 1,
            "appointment_date": on_day.to_rfc3339(),
            "status": "scheduled"
        }),
    )
    .await;

    let (status, body) = get(&app, "/api/appointments/date/2024-03-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/api/appointments/date/2024-03-16").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn dangling_reference_is_a_handled_500() {
    let app = seeded_app();

    // Seeded doctor 1 belongs to department 1; the delete is not blocked.
    let (status, _) = request(&app, "DELETE", "/api/departments/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, "/api/doctors").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("department 1 no longer exists"));
}
