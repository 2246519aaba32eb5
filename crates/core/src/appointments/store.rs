//! Appointment store
//!
//! Holds the last-loaded snapshots behind `Arc`s. Readers get a cheap clone
//! of the current snapshot; a reload fetches from the repository and swaps a
//! whole new snapshot in. Overlapping reloads are not ordered: whichever
//! completes last is what readers see.

use std::sync::Arc;

use agenda_domain::{Appointment, AppointmentQuery, Client, Result};
use chrono::NaiveDate;
use parking_lot::RwLock;
use tracing::debug;

use super::ports::AppointmentRepository;
use crate::clients::group_clients;

type Snapshot<T> = RwLock<Arc<Vec<T>>>;

pub struct AppointmentStore {
    repository: Arc<dyn AppointmentRepository>,
    appointments: Snapshot<Appointment>,
    today: Snapshot<Appointment>,
    clients: Snapshot<Client>,
}

impl AppointmentStore {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            repository,
            appointments: RwLock::new(Arc::default()),
            today: RwLock::new(Arc::default()),
            clients: RwLock::new(Arc::default()),
        }
    }

    pub fn repository(&self) -> &Arc<dyn AppointmentRepository> {
        &self.repository
    }

    /// Last table load
    pub fn appointments(&self) -> Arc<Vec<Appointment>> {
        Arc::clone(&self.appointments.read())
    }

    /// Last load of the current day
    pub fn today(&self) -> Arc<Vec<Appointment>> {
        Arc::clone(&self.today.read())
    }

    /// Last client directory computation
    pub fn clients(&self) -> Arc<Vec<Client>> {
        Arc::clone(&self.clients.read())
    }

    pub async fn reload(&self, query: &AppointmentQuery) -> Result<Arc<Vec<Appointment>>> {
        let rows = self.repository.list(query).await?;
        debug!(count = rows.len(), "appointments snapshot reloaded");
        Ok(swap(&self.appointments, rows))
    }

    pub async fn reload_today(&self, today: NaiveDate) -> Result<Arc<Vec<Appointment>>> {
        let rows = self.repository.list(&AppointmentQuery::on(today)).await?;
        debug!(%today, count = rows.len(), "today snapshot reloaded");
        Ok(swap(&self.today, rows))
    }

    /// Regroup clients from every appointment in the table.
    pub async fn reload_clients(&self) -> Result<Arc<Vec<Client>>> {
        let rows = self.repository.list(&AppointmentQuery::all()).await?;
        let clients = group_clients(&rows);
        debug!(count = clients.len(), "client snapshot reloaded");
        Ok(swap(&self.clients, clients))
    }
}

fn swap<T>(slot: &Snapshot<T>, values: Vec<T>) -> Arc<Vec<T>> {
    let snapshot = Arc::new(values);
    *slot.write() = Arc::clone(&snapshot);
    snapshot
}
