//! # Agenda App
//!
//! HTTP application layer - routes, view models and the main entry point.
//!
//! This crate contains:
//! - axum routes (dashboard, calendar, appointments, clients, reports, login)
//! - Application context (dependency injection)
//! - Error rendering and logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves the JSON surface consumed by the dashboard

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;
pub mod views;

// Re-export for convenience
pub use context::AppContext;
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
