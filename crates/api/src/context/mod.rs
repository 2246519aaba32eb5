//! Application context - dependency injection container

use std::sync::Arc;

use agenda_core::{
    AppointmentRepository, AppointmentStore, AuthService, BookingService, ClientService,
    CredentialVerifier, ReportService, SessionStore,
};
use agenda_domain::{AppointmentQuery, Config, Result};
use agenda_infra::{select_repository, Argon2CredentialVerifier, FileSessionStore};
use chrono::{Local, NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<AppointmentStore>,
    pub bookings: BookingService,
    pub clients: ClientService,
    pub reports: ReportService,
    pub auth: AuthService,
}

impl AppContext {
    /// Wire the production adapters.
    ///
    /// The repository is chosen once from `config.backend`: the REST table
    /// when URL and key are set, the fixture repository otherwise.
    ///
    /// # Errors
    /// `AgendaError::Config` for an unusable backend or account entry.
    pub fn new(config: Config) -> Result<Self> {
        let repository = select_repository(&config.backend, Local::now().date_naive())?;
        let verifier =
            Arc::new(Argon2CredentialVerifier::from_accounts_or_default(&config.accounts)?);
        let sessions = Arc::new(FileSessionStore::new(&config.session.path));

        info!(
            backend = repository.backend_name(),
            session_path = %config.session.path,
            "application context initialised"
        );

        Ok(Self::with_parts(config, repository, verifier, sessions))
    }

    /// Assemble a context from explicit adapters.
    pub fn with_parts(
        config: Config,
        repository: Arc<dyn AppointmentRepository>,
        verifier: Arc<dyn CredentialVerifier>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let store = Arc::new(AppointmentStore::new(repository));
        Self {
            config,
            bookings: BookingService::new(Arc::clone(&store)),
            clients: ClientService::new(Arc::clone(&store)),
            reports: ReportService::new(Arc::clone(&store)),
            auth: AuthService::new(verifier, sessions),
            store,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.repository().backend_name()
    }

    /// Local calendar date.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Local wall-clock time.
    pub fn now(&self) -> NaiveTime {
        Local::now().time()
    }

    /// Probe the repository and the session store.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .with_backend(self.backend_name())
            .add_component(self.check_repository_health().await)
            .add_component(self.check_session_health().await);

        status.calculate_score();
        status
    }

    async fn check_repository_health(&self) -> ComponentHealth {
        let query = AppointmentQuery::on(self.today()).limit(1);
        match self.store.repository().list(&query).await {
            Ok(_) => ComponentHealth::healthy("repository"),
            Err(e) => {
                warn!(error = %e, "repository health check failed");
                ComponentHealth::unhealthy("repository", e.to_string())
            }
        }
    }

    async fn check_session_health(&self) -> ComponentHealth {
        match self.auth.current_user().await {
            Ok(_) => ComponentHealth::healthy("sessions"),
            Err(e) => {
                warn!(error = %e, "session store health check failed");
                ComponentHealth::unhealthy("sessions", e.to_string())
            }
        }
    }
}
