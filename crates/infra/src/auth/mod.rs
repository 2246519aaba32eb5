//! Credential verification

pub mod argon2_verifier;

pub use argon2_verifier::{hash_password, Argon2CredentialVerifier, ADMIN_PASSWORD_ENV};
