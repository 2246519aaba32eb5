//! # Agenda Domain
//!
//! Business domain types and models for the barbershop agenda.
//!
//! This crate contains:
//! - Domain data types (Appointment, Client, DaySchedule, Report, ...)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Pure utilities: phone normalization, time formatting, business hours
//!
//! ## Architecture
//! - No dependencies on other agenda crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::phone::{format_phone_display, is_valid_phone, normalize_phone, phones_match};
pub use utils::time::{calculate_end_time, format_time, parse_hhmm};
