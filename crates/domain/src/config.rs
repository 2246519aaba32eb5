//! Configuration structures
//!
//! Loaded by `agenda-infra::config` from a TOML/JSON file and environment
//! overrides. Every section has defaults so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACKEND_TIMEOUT_SECS, DEFAULT_BIND_ADDR, DEFAULT_SESSION_PATH, DEFAULT_TABLE_NAME,
};
use crate::types::UserRole;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    /// Login accounts. When empty a default admin is provisioned at startup.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

/// Remote backend-as-a-service table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    #[serde(default)]
    pub url: Option<String>,
    /// Anonymous/service API key sent as `apikey` and bearer token
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Both URL and key are present and non-blank.
    pub fn is_configured(&self) -> bool {
        let present =
            |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.url) && present(&self.api_key)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr() }
    }
}

/// Logged-in user persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { path: default_session_path() }
    }
}

/// A login account; `password_hash` is an argon2 PHC string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: UserRole,
}

fn default_table() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_BACKEND_TIMEOUT_SECS
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_session_path() -> String {
    DEFAULT_SESSION_PATH.to_string()
}
