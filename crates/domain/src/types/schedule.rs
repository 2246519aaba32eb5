//! Slot grid types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Appointment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Occupied,
}

/// A half-hour mark of the business-hours table for a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// `HH:MM`
    pub time: String,
    pub status: SlotStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// Bookable/occupied layout of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    pub closed: bool,
    pub slots: Vec<Slot>,
    pub total_slots: usize,
    pub occupied_slots: usize,
    /// Rounded to the nearest whole percent
    pub occupancy_percent: u32,
}

impl DaySchedule {
    pub fn available_times(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.is_available())
            .map(|slot| slot.time.as_str())
            .collect()
    }
}

/// One cell of the month calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub closed: bool,
    pub total_slots: usize,
    pub occupied_slots: usize,
    pub occupancy_percent: u32,
    pub appointment_count: usize,
}
