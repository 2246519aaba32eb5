//! # Agenda Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The remote appointments table adapter (PostgREST-style REST)
//! - The in-memory fixture adapter and startup selection between the two
//! - Session persistence and argon2 credential verification
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `agenda-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod repositories;
pub mod session;

// Re-export commonly used items
pub use auth::{hash_password, Argon2CredentialVerifier};
pub use errors::InfraError;
pub use http::HttpClient;
pub use repositories::{select_repository, InMemoryAppointmentRepository, RestTableRepository};
pub use session::{FileSessionStore, InMemorySessionStore};
