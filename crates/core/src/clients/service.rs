//! Client directory - clients derived from appointments

use std::collections::HashMap;
use std::sync::Arc;

use agenda_domain::{
    format_phone_display, normalize_phone, AgendaError, Appointment, AppointmentQuery,
    AppointmentStatus, Client, Result,
};
use tracing::{error, info};

use crate::appointments::{AppointmentRepository, AppointmentStore};

/// Group appointments into clients keyed by normalized phone.
///
/// The name comes from the client's most recent appointment; `total_spent`
/// only counts completed ones. Sorted by name, case-insensitively.
pub fn group_clients(appointments: &[Appointment]) -> Vec<Client> {
    let mut grouped: HashMap<String, (Client, &Appointment)> = HashMap::new();

    for appointment in appointments {
        let phone = appointment.normalized_phone();
        let spent = if appointment.status == AppointmentStatus::Completed {
            appointment.price
        } else {
            0.0
        };

        match grouped.get_mut(&phone) {
            Some((client, latest)) => {
                client.appointment_count += 1;
                client.total_spent += spent;
                if appointment.scheduled_at > latest.scheduled_at {
                    *latest = appointment;
                    client.name = appointment.client_name.trim().to_string();
                    client.last_appointment = Some(appointment.date());
                }
            }
            None => {
                let client = Client {
                    name: appointment.client_name.trim().to_string(),
                    phone_display: format_phone_display(&phone),
                    phone: phone.clone(),
                    appointment_count: 1,
                    last_appointment: Some(appointment.date()),
                    total_spent: spent,
                };
                grouped.insert(phone, (client, appointment));
            }
        }
    }

    let mut clients: Vec<Client> = grouped.into_values().map(|(client, _)| client).collect();
    clients.sort_by(|a, b| {
        a.name.to_lowercase().cmp(&b.name.to_lowercase()).then_with(|| a.phone.cmp(&b.phone))
    });
    clients
}

pub struct ClientService {
    repository: Arc<dyn AppointmentRepository>,
    store: Arc<AppointmentStore>,
}

impl ClientService {
    pub fn new(store: Arc<AppointmentStore>) -> Self {
        Self { repository: Arc::clone(store.repository()), store }
    }

    /// Recompute the directory, optionally filtered.
    ///
    /// The search matches the name case-insensitively or, when it contains
    /// digits, the digits of the phone.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Client>> {
        let clients = self
            .store
            .reload_clients()
            .await
            .inspect_err(|err| error!(error = %err, "failed to load clients"))?;

        let needle = search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase);
        let Some(needle) = needle else {
            return Ok(clients.as_ref().clone());
        };
        let digits: String = needle.chars().filter(char::is_ascii_digit).collect();

        Ok(clients
            .iter()
            .filter(|client| {
                client.name.to_lowercase().contains(&needle)
                    || (!digits.is_empty() && client.phone.contains(&digits))
            })
            .cloned()
            .collect())
    }

    /// Every appointment of one client, newest first.
    pub async fn history(&self, phone: &str) -> Result<Vec<Appointment>> {
        let phone = client_phone(phone)?;
        self.repository.list(&AppointmentQuery::all().with_phone(&phone).descending()).await
    }

    /// Remove a client by deleting all their appointments.
    pub async fn delete(&self, phone: &str) -> Result<usize> {
        let phone = client_phone(phone)?;
        let removed = self
            .repository
            .delete_by_phone(&phone)
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete client appointments"))?;
        info!(removed, "client deleted");
        Ok(removed)
    }
}

fn client_phone(phone: &str) -> Result<String> {
    let normalized = normalize_phone(phone);
    if normalized.is_empty() {
        return Err(AgendaError::InvalidInput("phone is required".into()));
    }
    Ok(normalized)
}
