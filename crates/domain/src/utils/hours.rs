//! Business hours
//!
//! A static weekday table. Each open day is two periods split by lunch; slots
//! fall on every half hour, both period endpoints included.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::constants::SLOT_MINUTES;

/// Inclusive range of slot starts, in minutes from midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: u32,
    pub end: u32,
}

const fn hm(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

const MIDWEEK: [Period; 2] = [
    Period { start: hm(9, 0), end: hm(11, 30) },
    Period { start: hm(13, 0), end: hm(19, 0) },
];

const FRIDAY: [Period; 2] = [
    Period { start: hm(8, 0), end: hm(11, 30) },
    Period { start: hm(13, 0), end: hm(19, 0) },
];

const SATURDAY: [Period; 2] = [
    Period { start: hm(8, 0), end: hm(11, 30) },
    Period { start: hm(13, 0), end: hm(17, 0) },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursProfile {
    Closed,
    Midweek,
    Friday,
    Saturday,
}

impl HoursProfile {
    pub fn for_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun | Weekday::Mon => Self::Closed,
            Weekday::Tue | Weekday::Wed | Weekday::Thu => Self::Midweek,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_weekday(date.weekday())
    }

    pub fn periods(self) -> &'static [Period] {
        match self {
            Self::Closed => &[],
            Self::Midweek => &MIDWEEK,
            Self::Friday => &FRIDAY,
            Self::Saturday => &SATURDAY,
        }
    }

    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }

    /// `HH:MM` labels for every slot, ascending
    pub fn slot_labels(self) -> Vec<String> {
        self.periods()
            .iter()
            .flat_map(|period| (period.start..=period.end).step_by(SLOT_MINUTES as usize))
            .map(|minutes| format!("{:02}:{:02}", minutes / 60, minutes % 60))
            .collect()
    }
}

/// Day of week with Sunday as 0
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn slot_labels(date: NaiveDate) -> Vec<String> {
    HoursProfile::for_date(date).slot_labels()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn slot_counts_per_profile() {
        assert_eq!(HoursProfile::Closed.slot_labels().len(), 0);
        assert_eq!(HoursProfile::Midweek.slot_labels().len(), 19);
        assert_eq!(HoursProfile::Friday.slot_labels().len(), 21);
        assert_eq!(HoursProfile::Saturday.slot_labels().len(), 17);
    }

    #[test]
    fn endpoints_are_inclusive() {
        let labels = HoursProfile::Midweek.slot_labels();
        assert_eq!(labels.first().map(String::as_str), Some("09:00"));
        assert!(labels.contains(&"11:30".to_string()));
        assert!(!labels.contains(&"12:00".to_string()));
        assert!(labels.contains(&"13:00".to_string()));
        assert_eq!(labels.last().map(String::as_str), Some("19:00"));
    }

    #[test]
    fn weekday_mapping() {
        // 2024-05-12 is a Sunday
        assert_eq!(weekday_index(date(2024, 5, 12)), 0);
        assert!(HoursProfile::for_date(date(2024, 5, 12)).is_closed());
        assert!(HoursProfile::for_date(date(2024, 5, 13)).is_closed());
        assert_eq!(HoursProfile::for_date(date(2024, 5, 14)), HoursProfile::Midweek);
        assert_eq!(HoursProfile::for_date(date(2024, 5, 17)), HoursProfile::Friday);
        assert_eq!(HoursProfile::for_date(date(2024, 5, 18)), HoursProfile::Saturday);
        assert_eq!(slot_labels(date(2024, 5, 18)).last().map(String::as_str), Some("17:00"));
    }
}
