//! Login types
//!
//! The logged-in user is persisted as `{username, role}` under a single
//! storage key.

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    #[default]
    Admin,
    Barber,
}

impl_domain_status_conversions!(UserRole {
    Admin => "admin" | "administrador",
    Barber => "barber" | "barbeiro",
});

/// The persisted logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: UserRole,
}

/// Login form input
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_user_round_trips_as_plain_json() {
        let user = SessionUser { username: "carlos".into(), role: UserRole::Barber };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"username":"carlos","role":"barber"}"#);
        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials { username: "admin".into(), password: "hunter2".into() };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
