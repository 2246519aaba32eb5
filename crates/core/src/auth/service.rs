//! Authentication service

use std::sync::Arc;

use agenda_domain::{AgendaError, Credentials, Result, SessionUser};
use tracing::{info, warn};

use super::ports::{CredentialVerifier, SessionStore};

pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { verifier, sessions }
    }

    /// Check credentials and persist the session.
    ///
    /// # Errors
    /// `InvalidInput` for a blank username or password, `Auth` when they do
    /// not match an account.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionUser> {
        let username = credentials.username.trim();
        if username.is_empty() || credentials.password.is_empty() {
            return Err(AgendaError::InvalidInput("username and password are required".into()));
        }

        let Some(user) = self.verifier.verify(username, &credentials.password).await? else {
            warn!(username, "login rejected");
            return Err(AgendaError::Auth("invalid username or password".into()));
        };

        self.sessions.save(&user).await?;
        info!(username = %user.username, role = %user.role, "user logged in");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.sessions.clear().await?;
        info!("user logged out");
        Ok(())
    }

    pub async fn current_user(&self) -> Result<Option<SessionUser>> {
        self.sessions.load().await
    }

    /// The logged-in user, or an `Auth` error.
    pub async fn require_user(&self) -> Result<SessionUser> {
        self.current_user()
            .await?
            .ok_or_else(|| AgendaError::Auth("login required".into()))
    }
}
