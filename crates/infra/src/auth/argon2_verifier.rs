//! Argon2 password verification against configured accounts

use std::collections::HashMap;

use agenda_core::CredentialVerifier;
use agenda_domain::{AccountConfig, AgendaError, Result, SessionUser, UserRole};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use tracing::warn;

/// Environment variable holding the default admin password
pub const ADMIN_PASSWORD_ENV: &str = "AGENDA_ADMIN_PASSWORD";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

struct Account {
    password_hash: String,
    role: UserRole,
}

pub struct Argon2CredentialVerifier {
    accounts: HashMap<String, Account>,
}

impl Argon2CredentialVerifier {
    /// Index configured accounts by username.
    ///
    /// # Errors
    /// `AgendaError::Config` when a `password_hash` is not a PHC string.
    pub fn new(accounts: &[AccountConfig]) -> Result<Self> {
        let mut indexed = HashMap::with_capacity(accounts.len());
        for account in accounts {
            PasswordHash::new(&account.password_hash).map_err(|e| {
                AgendaError::Config(format!(
                    "account '{}' has an invalid password hash: {e}",
                    account.username
                ))
            })?;
            indexed.insert(
                account.username.trim().to_string(),
                Account { password_hash: account.password_hash.clone(), role: account.role },
            );
        }
        Ok(Self { accounts: indexed })
    }

    /// Configured accounts, or a single `admin` when none are configured.
    ///
    /// The admin password comes from `AGENDA_ADMIN_PASSWORD`; without it the
    /// password is `admin`, which is logged as a warning.
    pub fn from_accounts_or_default(accounts: &[AccountConfig]) -> Result<Self> {
        if !accounts.is_empty() {
            return Self::new(accounts);
        }

        let password = match std::env::var(ADMIN_PASSWORD_ENV) {
            Ok(password) if !password.is_empty() => password,
            _ => {
                warn!(
                    "no accounts configured and {ADMIN_PASSWORD_ENV} not set; \
                     default admin password is in use"
                );
                DEFAULT_ADMIN_PASSWORD.to_string()
            }
        };

        Self::new(&[AccountConfig {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(&password)?,
            role: UserRole::Admin,
        }])
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }
}

#[async_trait]
impl CredentialVerifier for Argon2CredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<SessionUser>> {
        let Some(account) = self.accounts.get(username) else {
            return Ok(None);
        };

        let parsed = PasswordHash::new(&account.password_hash)
            .map_err(|e| AgendaError::Internal(format!("stored password hash unreadable: {e}")))?;

        let matches = Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok();
        Ok(matches.then(|| SessionUser { username: username.to_string(), role: account.role }))
    }
}

/// Hash a password into an argon2 PHC string for the accounts config.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AgendaError::Internal(format!("password hashing failed: {e}")))
}
