//! Time formatting
//!
//! The table stores times in several shapes (`HH:MM`, `HH:MM:SS`, full
//! timestamps). Everything shown or compared is reduced to `HH:MM`.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AgendaError, Result};

static HH_MM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("HH_MM regex should compile - this is a bug"));

static HH_MM_SS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}$").expect("HH_MM_SS regex should compile - this is a bug")
});

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Normalize a time value to `HH:MM`.
///
/// `HH:MM` passes through, `HH:MM:SS` is truncated, anything else is parsed as
/// a timestamp and reformatted. Unparseable input is returned unmodified.
///
/// # Examples
///
/// ```
/// use agenda_domain::utils::time::format_time;
///
/// assert_eq!(format_time("09:30"), "09:30");
/// assert_eq!(format_time("09:30:00"), "09:30");
/// assert_eq!(format_time("2024-05-14T13:00:00+00:00"), "13:00");
/// assert_eq!(format_time("later"), "later");
/// ```
#[must_use]
pub fn format_time(value: &str) -> String {
    let trimmed = value.trim();
    if HH_MM.is_match(trimmed) {
        return trimmed.to_string();
    }
    if HH_MM_SS.is_match(trimmed) {
        return trimmed[..5].to_string();
    }
    match parse_datetime(trimmed) {
        Some(timestamp) => timestamp.format("%H:%M").to_string(),
        None => value.to_string(),
    }
}

/// Parse a timestamp the way the backend may send it.
///
/// RFC 3339 values keep the wall-clock time as written (the offset is not
/// applied).
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local());
    }
    if let Ok(timestamp) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%#z") {
        return Some(timestamp.naive_local());
    }
    NAIVE_FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Strictly parse `HH:MM`.
///
/// # Errors
/// Returns `AgendaError::InvalidInput` for anything else.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    if !HH_MM.is_match(trimmed) {
        return Err(AgendaError::InvalidInput(format!("invalid time '{value}', expected HH:MM")));
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| AgendaError::InvalidInput(format!("invalid time '{value}', expected HH:MM")))
}

/// Wall-clock time `duration_minutes` after `start`.
///
/// Minutes overflow into hours and past midnight the clock wraps
/// (`23:45` + 30 = `00:15`); the caller's date is not adjusted.
///
/// # Errors
/// Returns `AgendaError::InvalidInput` if `start` is not a time.
pub fn calculate_end_time(start: &str, duration_minutes: u32) -> Result<String> {
    let start = parse_hhmm(&format_time(start))?;
    let (end, _wrapped_seconds) =
        start.overflowing_add_signed(TimeDelta::minutes(i64::from(duration_minutes)));
    Ok(end.format("%H:%M").to_string())
}

/// Minutes from `start` to `end` on the 24h clock, wrapping past midnight.
pub fn minutes_between(start: &str, end: &str) -> Option<u32> {
    let start = parse_hhmm(start).ok()?;
    let end = parse_hhmm(end).ok()?;
    let minutes = (end - start).num_minutes().rem_euclid(MINUTES_PER_DAY);
    u32::try_from(minutes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DURATION_MINUTES;

    #[test]
    fn canonical_times_round_trip() {
        for label in ["00:00", "08:30", "13:00", "19:00", "23:59"] {
            let formatted = format_time(label);
            assert_eq!(formatted, label);
            assert_eq!(parse_hhmm(&formatted).unwrap().format("%H:%M").to_string(), label);
        }
    }

    #[test]
    fn formats_heterogeneous_inputs() {
        assert_eq!(format_time("14:15:59"), "14:15");
        assert_eq!(format_time("2024-05-14T08:00:00"), "08:00");
        assert_eq!(format_time("2024-05-14 17:30:00"), "17:30");
        assert_eq!(format_time("2024-05-14 17:30:00+00"), "17:30");
        assert_eq!(format_time("2024-05-14T10:45:00.000Z"), "10:45");
    }

    #[test]
    fn unparseable_input_is_returned_unmodified() {
        assert_eq!(format_time(" 9h "), " 9h ");
        assert_eq!(format_time(""), "");
    }

    #[test]
    fn parse_hhmm_rejects_malformed_times() {
        assert!(parse_hhmm("9:00").is_err());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("09:60").is_err());
        assert!(matches!(parse_hhmm("abc"), Err(AgendaError::InvalidInput(_))));
    }

    #[test]
    fn end_time_adds_duration() {
        assert_eq!(calculate_end_time("09:00", DEFAULT_DURATION_MINUTES).unwrap(), "09:30");
        assert_eq!(calculate_end_time("09:45", 30).unwrap(), "10:15");
        assert_eq!(calculate_end_time("13:00:00", 90).unwrap(), "14:30");
    }

    #[test]
    fn end_time_wraps_past_midnight() {
        assert_eq!(calculate_end_time("23:45", 30).unwrap(), "00:15");
    }

    #[test]
    fn end_time_rejects_bad_start() {
        assert!(calculate_end_time("noon", 30).is_err());
    }

    #[test]
    fn minutes_between_handles_wrap() {
        assert_eq!(minutes_between("09:00", "09:45"), Some(45));
        assert_eq!(minutes_between("23:45", "00:15"), Some(30));
        assert_eq!(minutes_between("09:00", "bad"), None);
    }
}
