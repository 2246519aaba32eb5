//! Availability grid
//!
//! Maps a day's appointments onto the static business-hours table. A slot is
//! occupied when some appointment on that date starts exactly at its label.

pub mod grid;

pub use grid::{build_day_schedule, build_month_overview, occupancy_percent};
