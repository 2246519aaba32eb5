#![allow(dead_code)]

//! Shared harness for route tests: in-memory adapters behind the real router

use std::sync::Arc;

use agenda_core::{AppointmentRepository, CredentialVerifier};
use agenda_domain::{
    AgendaError, Appointment, AppointmentDraft, AppointmentPatch, AppointmentQuery,
    AppointmentStatus, Config, Result, SessionUser, UserRole,
};
use agenda_infra::{InMemoryAppointmentRepository, InMemorySessionStore};
use agenda_lib::{build_router, AppContext};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "navalha";

/// 2024-05-14, a Tuesday
pub fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
}

/// Accepts exactly `USERNAME` / `PASSWORD`
pub struct FixedVerifier;

#[async_trait]
impl CredentialVerifier for FixedVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<SessionUser>> {
        Ok((username == USERNAME && password == PASSWORD)
            .then(|| SessionUser { username: username.to_string(), role: UserRole::Admin }))
    }
}

/// Every call fails as if the remote table were down
pub struct UnreachableRepository;

#[async_trait]
impl AppointmentRepository for UnreachableRepository {
    async fn list(&self, _query: &AppointmentQuery) -> Result<Vec<Appointment>> {
        Err(AgendaError::Network("connection refused".into()))
    }

    async fn get(&self, _id: i64) -> Result<Option<Appointment>> {
        Err(AgendaError::Network("connection refused".into()))
    }

    async fn insert(&self, _draft: AppointmentDraft) -> Result<Appointment> {
        Err(AgendaError::Network("connection refused".into()))
    }

    async fn update(&self, _id: i64, _patch: AppointmentPatch) -> Result<Appointment> {
        Err(AgendaError::Network("connection refused".into()))
    }

    async fn delete(&self, _id: i64) -> Result<()> {
        Err(AgendaError::Network("connection refused".into()))
    }

    async fn delete_by_phone(&self, _phone: &str) -> Result<usize> {
        Err(AgendaError::Network("connection refused".into()))
    }

    fn backend_name(&self) -> &'static str {
        "unreachable"
    }
}

pub struct TestApp {
    router: Router,
    pub repository: Arc<dyn AppointmentRepository>,
}

impl Default for TestApp {
    /// Empty in-memory table, nobody logged in.
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryAppointmentRepository::default()))
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(repository: Arc<dyn AppointmentRepository>) -> Self {
        let ctx = AppContext::with_parts(
            Config::default(),
            Arc::clone(&repository),
            Arc::new(FixedVerifier),
            Arc::new(InMemorySessionStore::default()),
        );
        Self { router: build_router(Arc::new(ctx)), repository }
    }

    /// Empty table with the admin logged in.
    pub async fn logged_in() -> Self {
        let app = Self::new();
        app.login().await;
        app
    }

    pub async fn login(&self) {
        let credentials = json!({ "username": USERNAME, "password": PASSWORD });
        let (status, _) = self.send(Method::POST, "/api/login", Some(credentials)).await;
        assert_eq!(status, StatusCode::OK);
    }

    /// Drive one request through the router; the body is parsed as JSON
    /// (`Null` when empty).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json =
            if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    /// Insert a 30-minute booking straight into the repository.
    pub async fn seed(
        &self,
        name: &str,
        phone: &str,
        date: NaiveDate,
        start: &str,
        price: f64,
        status: AppointmentStatus,
    ) -> Appointment {
        let start_time = chrono::NaiveTime::parse_from_str(start, "%H:%M").unwrap();
        let end = agenda_domain::calculate_end_time(start, 30).unwrap();
        self.repository
            .insert(AppointmentDraft {
                client_name: name.into(),
                phone: phone.into(),
                service: "Corte".into(),
                price,
                scheduled_at: date.and_time(start_time),
                start_time: start.into(),
                end_time: Some(end),
                status,
                notes: None,
            })
            .await
            .unwrap()
    }
}

pub fn booking(date: NaiveDate, start: &str) -> Value {
    json!({
        "client_name": "Rafael Souza",
        "phone": "(31) 98888-7777",
        "service": "Corte",
        "price": 35.0,
        "date": date.to_string(),
        "start_time": start,
    })
}
