//! Appointment fixtures

use agenda_domain::{Appointment, AppointmentStatus, NewAppointment};
use chrono::{NaiveDate, NaiveTime};

/// 2024-05-14, a Tuesday
pub fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
}

/// 2024-05-13, a Monday
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()
}

pub fn appointment(id: i64, date: NaiveDate, start: &str, status: AppointmentStatus) -> Appointment {
    let time = NaiveTime::parse_from_str(start, "%H:%M").unwrap();
    Appointment {
        id,
        client_name: format!("Cliente {id}"),
        phone: "31988887777".into(),
        service: "Corte".into(),
        price: 35.0,
        scheduled_at: date.and_time(time),
        start_time: start.into(),
        end_time: None,
        status,
        notes: None,
    }
}

pub fn new_appointment(date: NaiveDate, start: &str) -> NewAppointment {
    NewAppointment {
        client_name: "João Silva".into(),
        phone: "(31) 8888-7777".into(),
        service: "Corte".into(),
        price: 35.0,
        date,
        start_time: start.into(),
        duration_minutes: 30,
        status: AppointmentStatus::Scheduled,
        notes: None,
    }
}
