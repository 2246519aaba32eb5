//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Phone normalization
pub const COUNTRY_CODE: &str = "55";
/// Area code assumed for numbers typed without one.
///
/// This is a single-region business assumption (Belo Horizonte). Numbers from
/// other regions typed without an area code are normalized incorrectly.
pub const DEFAULT_AREA_CODE: &str = "31";
pub const MOBILE_PREFIX: &str = "9";
pub const NORMALIZED_PHONE_LEN: usize = 11;

// Scheduling
pub const SLOT_MINUTES: u32 = 30;
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

// Backend
pub const DEFAULT_TABLE_NAME: &str = "agendamentos";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 15;

// Session
pub const SESSION_KEY: &str = "agenda_user";
pub const DEFAULT_SESSION_PATH: &str = "./data/agenda_user.json";

// Server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
