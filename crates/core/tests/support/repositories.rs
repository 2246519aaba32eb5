//! Mock port implementations for testing
//!
//! In-memory mocks for the core ports, enabling deterministic tests without
//! a backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use agenda_core::{AppointmentRepository, CredentialVerifier, SessionStore};
use agenda_domain::{
    AgendaError, Appointment, AppointmentDraft, AppointmentPatch, AppointmentQuery,
    Result as DomainResult, SessionUser, UserRole,
};
use async_trait::async_trait;
use parking_lot::Mutex;

/// In-memory mock for `AppointmentRepository`.
///
/// Records how many inserts were attempted so tests can assert that
/// validation failures never reach the backend.
#[derive(Default, Clone)]
pub struct MockAppointmentRepository {
    rows: Arc<Mutex<Vec<Appointment>>>,
    inserts: Arc<AtomicUsize>,
    fail_with: Arc<Mutex<Option<AgendaError>>>,
}

impl MockAppointmentRepository {
    pub fn new(rows: Vec<Appointment>) -> Self {
        Self { rows: Arc::new(Mutex::new(rows)), ..Self::default() }
    }

    /// Make every subsequent call fail with `error`.
    pub fn failing(self, error: AgendaError) -> Self {
        *self.fail_with.lock() = Some(error);
        self
    }

    pub fn rows(&self) -> Vec<Appointment> {
        self.rows.lock().clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn check(&self) -> DomainResult<()> {
        match self.fail_with.lock().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AppointmentRepository for MockAppointmentRepository {
    async fn list(&self, query: &AppointmentQuery) -> DomainResult<Vec<Appointment>> {
        self.check()?;
        let mut rows: Vec<Appointment> =
            self.rows.lock().iter().filter(|a| query.matches(a)).cloned().collect();
        query.arrange(&mut rows);
        Ok(rows)
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Appointment>> {
        self.check()?;
        Ok(self.rows.lock().iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, draft: AppointmentDraft) -> DomainResult<Appointment> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut rows = self.rows.lock();
        let id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let appointment = draft.into_appointment(id);
        rows.push(appointment.clone());
        Ok(appointment)
    }

    async fn update(&self, id: i64, patch: AppointmentPatch) -> DomainResult<Appointment> {
        self.check()?;
        let mut rows = self.rows.lock();
        let row = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AgendaError::NotFound(format!("appointment {id}")))?;
        patch.apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.check()?;
        self.rows.lock().retain(|a| a.id != id);
        Ok(())
    }

    async fn delete_by_phone(&self, phone: &str) -> DomainResult<usize> {
        self.check()?;
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|a| a.normalized_phone() != phone);
        Ok(before - rows.len())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

/// Accepts a single username/password pair.
pub struct MockCredentialVerifier {
    pub username: String,
    pub password: String,
}

impl MockCredentialVerifier {
    pub fn admin(password: &str) -> Self {
        Self { username: "admin".into(), password: password.into() }
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> DomainResult<Option<SessionUser>> {
        Ok((username == self.username && password == self.password)
            .then(|| SessionUser { username: username.to_string(), role: UserRole::Admin }))
    }
}

#[derive(Default)]
pub struct MockSessionStore {
    user: Mutex<Option<SessionUser>>,
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self) -> DomainResult<Option<SessionUser>> {
        Ok(self.user.lock().clone())
    }

    async fn save(&self, user: &SessionUser) -> DomainResult<()> {
        *self.user.lock() = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> DomainResult<()> {
        *self.user.lock() = None;
        Ok(())
    }
}
