//! Appointment table, add/edit, status change and delete

mod support;

use std::sync::Arc;

use agenda_domain::AppointmentStatus;
use axum::http::{Method, StatusCode};
use serde_json::json;
use support::{booking, tuesday, TestApp, UnreachableRepository};

#[tokio::test]
async fn create_returns_decorated_view() {
    let app = TestApp::logged_in().await;

    let (status, body) =
        app.send(Method::POST, "/api/appointments", Some(booking(tuesday(), "09:00"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["phone"], "31988887777");
    assert_eq!(body["phone_display"], "(31) 98888-7777");
    assert_eq!(body["time_range"], "09:00 - 09:30");
    assert_eq!(body["price_display"], "R$ 35,00");
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["date"], "2024-05-14");
}

#[tokio::test]
async fn double_booking_is_a_conflict() {
    let app = TestApp::logged_in().await;
    let first =
        app.send(Method::POST, "/api/appointments", Some(booking(tuesday(), "09:00"))).await;
    assert_eq!(first.0, StatusCode::CREATED);

    let (status, body) =
        app.send(Method::POST, "/api/appointments", Some(booking(tuesday(), "09:00"))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("09:00"));
}

#[tokio::test]
async fn canceled_booking_frees_the_slot() {
    let app = TestApp::logged_in().await;
    app.seed("Ana", "31977776666", tuesday(), "10:00", 30.0, AppointmentStatus::Canceled).await;

    let (status, _) =
        app.send(Method::POST, "/api/appointments", Some(booking(tuesday(), "10:00"))).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn invalid_phone_is_rejected_before_submission() {
    let app = TestApp::logged_in().await;
    let mut payload = booking(tuesday(), "09:00");
    payload["phone"] = json!("123");

    let (status, body) = app.send(Method::POST, "/api/appointments", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("phone"));
    assert_eq!(app.get("/api/appointments").await.1, json!([]));
}

#[tokio::test]
async fn list_filters_by_range_and_status() {
    let app = TestApp::logged_in().await;
    let wednesday = tuesday().succ_opt().unwrap();
    app.seed("Ana", "31977776666", tuesday(), "09:00", 30.0, AppointmentStatus::Confirmed).await;
    app.seed("Bruno", "31966665555", tuesday(), "10:00", 30.0, AppointmentStatus::Canceled).await;
    app.seed("Caio", "31955554444", wednesday, "09:00", 30.0, AppointmentStatus::Scheduled).await;

    let (status, body) = app.get("/api/appointments?from=2024-05-14&to=2024-05-14").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = app.get("/api/appointments?status=cancelado&from=&to=").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["client_name"], "Bruno");
}

#[tokio::test]
async fn inverted_range_is_invalid_input() {
    let app = TestApp::logged_in().await;

    let (status, _) = app.get("/api/appointments?from=2024-05-20&to=2024-05-14").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_and_update_appointment() {
    let app = TestApp::logged_in().await;
    let seeded = app
        .seed("Ana", "31977776666", tuesday(), "09:00", 30.0, AppointmentStatus::Scheduled)
        .await;
    let uri = format!("/api/appointments/{}", seeded.id);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client_name"], "Ana");

    let (status, body) = app
        .send(Method::PUT, &uri, Some(json!({ "start_time": "14:00", "duration_minutes": 60 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_range"], "14:00 - 15:00");
    assert_eq!(body["client_name"], "Ana");
}

#[tokio::test]
async fn status_change_and_unknown_status() {
    let app = TestApp::logged_in().await;
    let seeded = app
        .seed("Ana", "31977776666", tuesday(), "09:00", 30.0, AppointmentStatus::Scheduled)
        .await;
    let uri = format!("/api/appointments/{}/status", seeded.id);

    let (status, body) =
        app.send(Method::PATCH, &uri, Some(json!({ "status": "completed" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");

    let (status, _) = app.send(Method::PATCH, &uri, Some(json!({ "status": "no-show" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reviving_into_a_taken_slot_is_a_conflict() {
    let app = TestApp::logged_in().await;
    app.seed("Ana", "31977776666", tuesday(), "10:00", 30.0, AppointmentStatus::Confirmed).await;
    let canceled = app
        .seed("Bia", "31966665555", tuesday(), "10:00", 30.0, AppointmentStatus::Canceled)
        .await;
    let uri = format!("/api/appointments/{}/status", canceled.id);

    let (status, body) =
        app.send(Method::PATCH, &uri, Some(json!({ "status": "scheduled" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already booked"));
}

#[tokio::test]
async fn delete_requires_confirmation() {
    let app = TestApp::logged_in().await;
    let seeded = app
        .seed("Ana", "31977776666", tuesday(), "09:00", 30.0, AppointmentStatus::Scheduled)
        .await;
    let uri = format!("/api/appointments/{}", seeded.id);

    let (status, body) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("confirm=true"));
    assert_eq!(app.get(&uri).await.0, StatusCode::OK);

    let (status, _) = app.send(Method::DELETE, &format!("{uri}?confirm=true"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.get(&uri).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let app = TestApp::logged_in().await;

    assert_eq!(app.get("/api/appointments/999").await.0, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/api/appointments/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn backend_failure_is_a_bad_gateway() {
    let app = TestApp::with_repository(Arc::new(UnreachableRepository));
    app.login().await;

    let (status, body) = app.get("/api/appointments").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "connection refused");
}
