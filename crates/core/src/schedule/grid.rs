//! Day and month grid builders

use std::collections::HashMap;

use agenda_domain::utils::hours::{weekday_index, HoursProfile};
use agenda_domain::{
    AgendaError, Appointment, DayOverview, DaySchedule, Result, Slot, SlotStatus,
};
use chrono::{Datelike, NaiveDate};

/// Lay out one day's slots.
///
/// Only appointments dated `date` are considered; when two share a start
/// time the first one in input order holds the slot. Appointments starting
/// off the grid are ignored. Closed days always come back empty, whatever
/// the input.
pub fn build_day_schedule(date: NaiveDate, appointments: &[Appointment]) -> DaySchedule {
    let profile = HoursProfile::for_date(date);
    let weekday = weekday_index(date);

    if profile.is_closed() {
        return DaySchedule {
            date,
            weekday,
            closed: true,
            slots: Vec::new(),
            total_slots: 0,
            occupied_slots: 0,
            occupancy_percent: 0,
        };
    }

    let mut by_label: HashMap<String, &Appointment> = HashMap::new();
    for appointment in appointments.iter().filter(|a| a.date() == date) {
        by_label.entry(appointment.start_label()).or_insert(appointment);
    }

    let slots: Vec<Slot> = profile
        .slot_labels()
        .into_iter()
        .map(|time| match by_label.get(&time) {
            Some(appointment) => Slot {
                time,
                status: SlotStatus::Occupied,
                appointment: Some((*appointment).clone()),
            },
            None => Slot { time, status: SlotStatus::Available, appointment: None },
        })
        .collect();

    let total_slots = slots.len();
    let occupied_slots = slots.iter().filter(|slot| !slot.is_available()).count();

    DaySchedule {
        date,
        weekday,
        closed: false,
        slots,
        total_slots,
        occupied_slots,
        occupancy_percent: occupancy_percent(occupied_slots, total_slots),
    }
}

/// One overview cell per day of the month.
///
/// # Errors
/// `AgendaError::InvalidInput` when `year`/`month` is not a calendar month.
pub fn build_month_overview(
    year: i32,
    month: u32,
    appointments: &[Appointment],
) -> Result<Vec<DayOverview>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AgendaError::InvalidInput(format!("invalid month {year}-{month:02}")))?;

    let overview = first
        .iter_days()
        .take_while(|day| day.month() == month)
        .map(|day| {
            let schedule = build_day_schedule(day, appointments);
            DayOverview {
                date: day,
                closed: schedule.closed,
                total_slots: schedule.total_slots,
                occupied_slots: schedule.occupied_slots,
                occupancy_percent: schedule.occupancy_percent,
                appointment_count: appointments.iter().filter(|a| a.date() == day).count(),
            }
        })
        .collect();

    Ok(overview)
}

/// `occupied / total` as a whole percent, rounded half up; 0 when `total` is 0.
pub fn occupancy_percent(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (occupied * 100 + total / 2) / total;
    u32::try_from(percent).unwrap_or(u32::MAX)
}
