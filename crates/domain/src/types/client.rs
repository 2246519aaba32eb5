//! Client directory entry
//!
//! Clients are not stored. They are recomputed from appointments, grouped by
//! normalized phone number, every time the directory is loaded. Two people
//! sharing a phone line collapse into one client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Name from the client's most recent appointment
    pub name: String,
    /// Normalized 11-digit phone
    pub phone: String,
    /// `(DD) DDDDD-DDDD`
    pub phone_display: String,
    pub appointment_count: usize,
    pub last_appointment: Option<NaiveDate>,
    /// Sum of completed appointment prices
    pub total_spent: f64,
}
