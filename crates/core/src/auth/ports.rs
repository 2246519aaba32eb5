//! Port interfaces for authentication
//!
//! Credential checking and session persistence live in infrastructure.

use agenda_domain::{Result, SessionUser};
use async_trait::async_trait;

/// Trait for checking a username/password pair
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// The matching user, or `None` when the credentials are wrong
    async fn verify(&self, username: &str, password: &str) -> Result<Option<SessionUser>>;
}

/// Trait for persisting the single logged-in user
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the persisted user, if any
    async fn load(&self) -> Result<Option<SessionUser>>;

    /// Persist the user, replacing any previous one
    async fn save(&self, user: &SessionUser) -> Result<()>;

    /// Forget the persisted user
    async fn clear(&self) -> Result<()>;
}
