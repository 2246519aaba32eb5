//! # Agenda Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The availability grid builder
//! - The appointment store and the booking, client, report and auth services
//!
//! ## Architecture Principles
//! - Only depends on `agenda-domain`
//! - No HTTP, filesystem or platform code
//! - All external dependencies via traits

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod reports;
pub mod schedule;

pub use appointments::{AppointmentRepository, AppointmentStore, BookingService};
pub use auth::{AuthService, CredentialVerifier, SessionStore};
pub use clients::{group_clients, ClientService};
pub use reports::{build_dashboard, build_report, ReportService};
pub use schedule::{build_day_schedule, build_month_overview};
