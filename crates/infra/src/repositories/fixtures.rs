//! Example appointments served when no backend is configured

use agenda_domain::{calculate_end_time, Appointment, AppointmentStatus};
use chrono::{Days, NaiveDate, NaiveTime};

struct Example {
    day_offset: i64,
    start: &'static str,
    client_name: &'static str,
    phone: &'static str,
    service: &'static str,
    price: f64,
    duration: u32,
    status: AppointmentStatus,
    notes: Option<&'static str>,
}

#[rustfmt::skip]
const EXAMPLES: [Example; 10] = [
    Example { day_offset: -7, start: "10:00", client_name: "João Silva", phone: "31988887777", service: "Corte", price: 35.0, duration: 30, status: AppointmentStatus::Completed, notes: None },
    Example { day_offset: -2, start: "09:00", client_name: "Pedro Santos", phone: "31987654321", service: "Corte + Barba", price: 55.0, duration: 60, status: AppointmentStatus::Completed, notes: None },
    Example { day_offset: -1, start: "14:00", client_name: "Lucas Oliveira", phone: "31991234567", service: "Barba", price: 25.0, duration: 30, status: AppointmentStatus::Canceled, notes: Some("Desmarcou por telefone") },
    Example { day_offset: 0, start: "09:00", client_name: "Carlos Souza", phone: "31993456789", service: "Corte", price: 35.0, duration: 30, status: AppointmentStatus::Completed, notes: None },
    Example { day_offset: 0, start: "10:30", client_name: "João Silva", phone: "31988887777", service: "Barba", price: 25.0, duration: 30, status: AppointmentStatus::Confirmed, notes: None },
    Example { day_offset: 0, start: "14:00", client_name: "Rafael Lima", phone: "31994567890", service: "Corte + Barba", price: 55.0, duration: 60, status: AppointmentStatus::Scheduled, notes: Some("Primeira vez") },
    Example { day_offset: 0, start: "16:30", client_name: "Bruno Costa", phone: "31995678901", service: "Pigmentação", price: 45.0, duration: 30, status: AppointmentStatus::Scheduled, notes: None },
    Example { day_offset: 1, start: "11:00", client_name: "Pedro Santos", phone: "31987654321", service: "Corte", price: 35.0, duration: 30, status: AppointmentStatus::Confirmed, notes: None },
    Example { day_offset: 2, start: "15:00", client_name: "Marcos Pereira", phone: "31996789012", service: "Sobrancelha", price: 15.0, duration: 30, status: AppointmentStatus::Scheduled, notes: None },
    Example { day_offset: 7, start: "09:30", client_name: "Lucas Oliveira", phone: "31991234567", service: "Corte", price: 35.0, duration: 30, status: AppointmentStatus::Scheduled, notes: None },
];

/// The example data set, dated relative to `today`.
pub fn example_appointments(today: NaiveDate) -> Vec<Appointment> {
    EXAMPLES
        .iter()
        .zip(1..)
        .filter_map(|(example, id)| {
            let date = shift(today, example.day_offset)?;
            let start = NaiveTime::parse_from_str(example.start, "%H:%M").ok()?;
            Some(Appointment {
                id,
                client_name: example.client_name.to_string(),
                phone: example.phone.to_string(),
                service: example.service.to_string(),
                price: example.price,
                scheduled_at: date.and_time(start),
                start_time: example.start.to_string(),
                end_time: calculate_end_time(example.start, example.duration).ok(),
                status: example.status,
                notes: example.notes.map(str::to_string),
            })
        })
        .collect()
}

fn shift(today: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset < 0 {
        today.checked_sub_days(days)
    } else {
        today.checked_add_days(days)
    }
}

#[cfg(test)]
mod tests {
    use agenda_domain::{is_valid_phone, parse_hhmm};

    use super::*;

    #[test]
    fn fixtures_are_well_formed() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        let rows = example_appointments(today);

        assert_eq!(rows.len(), EXAMPLES.len());
        assert!(rows.iter().all(|a| is_valid_phone(&a.phone)));
        assert!(rows.iter().all(|a| parse_hhmm(&a.start_time).is_ok()));
        assert!(rows.iter().any(|a| a.date() == today));

        let mut ids: Vec<i64> = rows.iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
    }
}
