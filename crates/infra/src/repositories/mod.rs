//! `AppointmentRepository` adapters and startup selection

pub mod fixtures;
pub mod in_memory;
pub mod rest_table;

use std::sync::Arc;

use agenda_core::AppointmentRepository;
use agenda_domain::{BackendConfig, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

pub use in_memory::InMemoryAppointmentRepository;
pub use rest_table::RestTableRepository;

/// Pick the data-access strategy once, at startup.
///
/// A configured backend (URL and key) gets the REST adapter. Anything else
/// runs on the fixture adapter seeded around `today`; missing configuration
/// is a warning, not a failure.
///
/// # Errors
/// `AgendaError::Config` when the backend is configured but unusable (bad
/// URL, key not valid as a header).
pub fn select_repository(
    backend: &BackendConfig,
    today: NaiveDate,
) -> Result<Arc<dyn AppointmentRepository>> {
    if backend.is_configured() {
        let repository = RestTableRepository::new(backend)?;
        info!(endpoint = %repository.endpoint(), "using remote appointments table");
        return Ok(Arc::new(repository));
    }

    warn!("backend url/key not configured; serving example appointments from memory");
    Ok(Arc::new(InMemoryAppointmentRepository::with_fixtures(today)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    #[test]
    fn unconfigured_backend_falls_back_to_fixtures() {
        let repository = select_repository(&BackendConfig::default(), today()).unwrap();
        assert_eq!(repository.backend_name(), "memory");
    }

    #[test]
    fn blank_key_counts_as_unconfigured() {
        let backend = BackendConfig {
            url: Some("https://example.supabase.co".into()),
            api_key: Some("   ".into()),
            ..BackendConfig::default()
        };
        assert_eq!(select_repository(&backend, today()).unwrap().backend_name(), "memory");
    }

    #[test]
    fn configured_backend_uses_rest_table() {
        let backend = BackendConfig {
            url: Some("https://example.supabase.co".into()),
            api_key: Some("anon-key".into()),
            ..BackendConfig::default()
        };
        assert_eq!(select_repository(&backend, today()).unwrap().backend_name(), "rest");
    }

    #[test]
    fn malformed_url_is_a_config_error() {
        let backend = BackendConfig {
            url: Some("not a url".into()),
            api_key: Some("anon-key".into()),
            ..BackendConfig::default()
        };
        assert!(matches!(
            select_repository(&backend, today()),
            Err(agenda_domain::AgendaError::Config(_))
        ));
    }
}
