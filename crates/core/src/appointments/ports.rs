//! Port interfaces for appointment data access
//!
//! One filtered-CRUD interface over the appointments table. Infrastructure
//! provides a remote REST adapter and an in-memory fixture adapter; which one
//! runs is decided once at startup.

use agenda_domain::{Appointment, AppointmentDraft, AppointmentPatch, AppointmentQuery, Result};
use async_trait::async_trait;

/// Trait for appointment persistence and retrieval
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Select rows matching the query, ordered by `scheduled_at`
    async fn list(&self, query: &AppointmentQuery) -> Result<Vec<Appointment>>;

    /// Fetch one row by id
    async fn get(&self, id: i64) -> Result<Option<Appointment>>;

    /// Insert a row and return it with its assigned id
    async fn insert(&self, draft: AppointmentDraft) -> Result<Appointment>;

    /// Apply a column patch and return the updated row
    ///
    /// Returns `AgendaError::NotFound` when no row has that id.
    async fn update(&self, id: i64, patch: AppointmentPatch) -> Result<Appointment>;

    /// Delete a row by id
    async fn delete(&self, id: i64) -> Result<()>;

    /// Delete every row for a normalized phone, returning the count removed
    async fn delete_by_phone(&self, phone: &str) -> Result<usize>;

    /// Short adapter name for logs
    fn backend_name(&self) -> &'static str;
}
