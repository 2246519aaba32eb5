//! Form validation shared by add and edit

use agenda_domain::{format_time, is_valid_phone, normalize_phone, parse_hhmm, AgendaError, Result};
use chrono::NaiveTime;

pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AgendaError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Normalized 11-digit phone
pub(crate) fn phone(value: &str) -> Result<String> {
    let value = required("phone", value)?;
    if !is_valid_phone(&value) {
        return Err(AgendaError::InvalidInput(format!("invalid phone number '{value}'")));
    }
    Ok(normalize_phone(&value))
}

pub(crate) fn price(value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AgendaError::InvalidInput(format!("invalid price {value}")));
    }
    Ok(value)
}

/// Canonical `HH:MM` label and the parsed time
pub(crate) fn start_time(value: &str) -> Result<(String, NaiveTime)> {
    let value = required("start_time", value)?;
    let label = format_time(&value);
    let time = parse_hhmm(&label)?;
    Ok((label, time))
}

pub(crate) fn duration(minutes: u32) -> Result<u32> {
    if minutes == 0 {
        return Err(AgendaError::InvalidInput("duration must be positive".into()));
    }
    Ok(minutes)
}

pub(crate) fn notes(value: Option<String>) -> Option<String> {
    value.map(|notes| notes.trim().to_string()).filter(|notes| !notes.is_empty())
}
