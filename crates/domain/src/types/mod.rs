//! Domain types and models

pub mod appointment;
pub mod client;
pub mod report;
pub mod schedule;
pub mod user;

pub use appointment::{
    Appointment, AppointmentDraft, AppointmentPatch, AppointmentQuery, AppointmentStatus,
    AppointmentUpdate, NewAppointment, SortOrder,
};
pub use client::Client;
pub use report::{DailyCount, DashboardSummary, Report, ServiceSummary, StatusCounts};
pub use schedule::{DayOverview, DaySchedule, Slot, SlotStatus};
pub use user::{Credentials, SessionUser, UserRole};
