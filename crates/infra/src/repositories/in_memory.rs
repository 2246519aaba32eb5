//! In-memory appointments table
//!
//! Used when no backend is configured. Applies the same filter, ordering and
//! limit semantics as the remote table so callers cannot tell them apart.

use std::sync::atomic::{AtomicI64, Ordering};

use agenda_core::AppointmentRepository;
use agenda_domain::{
    normalize_phone, AgendaError, Appointment, AppointmentDraft, AppointmentPatch,
    AppointmentQuery, Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use tracing::debug;

use super::fixtures::example_appointments;

pub struct InMemoryAppointmentRepository {
    rows: RwLock<Vec<Appointment>>,
    next_id: AtomicI64,
}

impl InMemoryAppointmentRepository {
    pub fn new(rows: Vec<Appointment>) -> Self {
        let next_id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self { rows: RwLock::new(rows), next_id: AtomicI64::new(next_id) }
    }

    /// Seed with the example data set laid out around `today`.
    pub fn with_fixtures(today: NaiveDate) -> Self {
        Self::new(example_appointments(today))
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn list(&self, query: &AppointmentQuery) -> Result<Vec<Appointment>> {
        let mut rows: Vec<Appointment> =
            self.rows.read().iter().filter(|a| query.matches(a)).cloned().collect();
        query.arrange(&mut rows);
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Appointment>> {
        Ok(self.rows.read().iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, draft: AppointmentDraft) -> Result<Appointment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let appointment = draft.into_appointment(id);
        self.rows.write().push(appointment.clone());
        debug!(id, "inserted appointment in memory");
        Ok(appointment)
    }

    async fn update(&self, id: i64, patch: AppointmentPatch) -> Result<Appointment> {
        let mut rows = self.rows.write();
        let row = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AgendaError::NotFound(format!("appointment {id} not found")))?;
        patch.apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(AgendaError::NotFound(format!("appointment {id} not found")));
        }
        Ok(())
    }

    async fn delete_by_phone(&self, phone: &str) -> Result<usize> {
        let phone = normalize_phone(phone);
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|a| a.normalized_phone() != phone);
        Ok(before - rows.len())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use agenda_domain::AppointmentStatus;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    fn draft(start: &str) -> AppointmentDraft {
        let time = chrono::NaiveTime::parse_from_str(start, "%H:%M").unwrap();
        AppointmentDraft {
            client_name: "Rafael".into(),
            phone: "31977776666".into(),
            service: "Corte".into(),
            price: 35.0,
            scheduled_at: today().and_time(time),
            start_time: start.into(),
            end_time: Some("10:30".into()),
            status: AppointmentStatus::Scheduled,
            notes: None,
        }
    }

    #[tokio::test]
    async fn ids_are_allocated_monotonically() {
        let repository = InMemoryAppointmentRepository::with_fixtures(today());
        let seeded = repository.len();

        let first = repository.insert(draft("10:00")).await.unwrap();
        repository.delete(first.id).await.unwrap();
        let second = repository.insert(draft("10:00")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(repository.len(), seeded + 1);
    }

    #[tokio::test]
    async fn list_applies_filters_order_and_limit() {
        let repository = InMemoryAppointmentRepository::with_fixtures(today());

        let todays = repository.list(&AppointmentQuery::on(today())).await.unwrap();
        assert!(!todays.is_empty());
        assert!(todays.iter().all(|a| a.date() == today()));
        assert!(todays.windows(2).all(|w| w[0].scheduled_at <= w[1].scheduled_at));

        let latest = repository.list(&AppointmentQuery::all().descending().limit(1)).await.unwrap();
        let all = repository.list(&AppointmentQuery::all()).await.unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].scheduled_at, all.last().unwrap().scheduled_at);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_are_not_found() {
        let repository = InMemoryAppointmentRepository::default();
        assert!(matches!(
            repository.update(42, AppointmentPatch::default()).await,
            Err(AgendaError::NotFound(_))
        ));
        assert!(matches!(repository.delete(42).await, Err(AgendaError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_by_phone_matches_normalized_form() {
        let repository = InMemoryAppointmentRepository::default();
        repository.insert(draft("09:00")).await.unwrap();
        repository.insert(draft("10:00")).await.unwrap();

        assert_eq!(repository.delete_by_phone("(31) 97777-6666").await.unwrap(), 2);
        assert!(repository.is_empty());
    }
}
