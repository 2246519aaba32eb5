//! Reporting types
//!
//! This module centralizes the aggregate views shown by the dashboard:
//! - Per-status counters
//! - Period report (revenue, services, daily volume)
//! - Today's dashboard summary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Appointment, AppointmentStatus};

/* -------------------------------------------------------------------------- */
/* Status counters */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub scheduled: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub canceled: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: AppointmentStatus) {
        match status {
            AppointmentStatus::Scheduled => self.scheduled += 1,
            AppointmentStatus::Confirmed => self.confirmed += 1,
            AppointmentStatus::Completed => self.completed += 1,
            AppointmentStatus::Canceled => self.canceled += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.scheduled + self.confirmed + self.completed + self.canceled
    }
}

impl<'a> FromIterator<&'a Appointment> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = &'a Appointment>>(iter: I) -> Self {
        let mut counts = Self::default();
        for appointment in iter {
            counts.record(appointment.status);
        }
        counts
    }
}

/* -------------------------------------------------------------------------- */
/* Period report */
/* -------------------------------------------------------------------------- */

/// Volume and revenue of one service in the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub service: String,
    pub count: usize,
    /// Completed revenue only
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total_appointments: usize,
    pub by_status: StatusCounts,
    /// Sum of completed prices
    pub revenue: f64,
    /// Sum of scheduled + confirmed prices
    pub expected_revenue: f64,
    /// Revenue / completed count; zero without completed appointments
    pub average_ticket: f64,
    /// Sorted by count, then name
    pub services: Vec<ServiceSummary>,
    /// Days with at least one appointment, ascending
    pub daily: Vec<DailyCount>,
}

/* -------------------------------------------------------------------------- */
/* Dashboard */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub total_today: usize,
    pub by_status: StatusCounts,
    pub revenue_today: f64,
    pub occupancy_percent: u32,
    pub next_appointment: Option<Appointment>,
}
