//! Appointment booking domain

pub mod ports;
pub mod service;
pub mod store;
mod validation;

pub use ports::*;
pub use service::BookingService;
pub use store::AppointmentStore;
