//! Reporting and dashboard domain

pub mod service;

pub use service::{build_dashboard, build_report, ReportService};
