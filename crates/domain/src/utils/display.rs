//! Display formatting for the pt-BR dashboard

use chrono::NaiveDate;

/// Format a price as Brazilian reais, e.g. `R$ 1.234,50`.
///
/// ```
/// use agenda_domain::utils::display::format_price_brl;
///
/// assert_eq!(format_price_brl(35.0), "R$ 35,00");
/// assert_eq!(format_price_brl(1234.5), "R$ 1.234,50");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_price_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let integer = (cents / 100).to_string();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

/// `DD/MM/YYYY`
#[must_use]
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `09:00 - 09:30`, or just the start when no end is known
#[must_use]
pub fn format_time_range(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) if !end.is_empty() => format!("{start} - {end}"),
        _ => start.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices() {
        assert_eq!(format_price_brl(0.0), "R$ 0,00");
        assert_eq!(format_price_brl(35.0), "R$ 35,00");
        assert_eq!(format_price_brl(49.9), "R$ 49,90");
        assert_eq!(format_price_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_price_brl(-12.5), "-R$ 12,50");
    }

    #[test]
    fn dates_and_ranges() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
        assert_eq!(format_date_br(date), "04/05/2024");
        assert_eq!(format_time_range("09:00", Some("09:30")), "09:00 - 09:30");
        assert_eq!(format_time_range("09:00", None), "09:00");
    }
}
