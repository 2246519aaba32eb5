//! Period reports and today's dashboard

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use agenda_domain::{
    AgendaError, Appointment, AppointmentQuery, AppointmentStatus, DailyCount, DashboardSummary,
    Report, Result, ServiceSummary, StatusCounts,
};
use chrono::{NaiveDate, NaiveTime};
use tracing::error;

use crate::appointments::{AppointmentRepository, AppointmentStore};
use crate::schedule::build_day_schedule;

/// Aggregate the appointments dated within `from..=to`.
#[allow(clippy::cast_precision_loss)]
pub fn build_report(from: NaiveDate, to: NaiveDate, appointments: &[Appointment]) -> Report {
    let in_range: Vec<&Appointment> =
        appointments.iter().filter(|a| (from..=to).contains(&a.date())).collect();

    let by_status: StatusCounts = in_range.iter().copied().collect();
    let revenue = sum_prices(&in_range, |status| status == AppointmentStatus::Completed);
    let expected_revenue = sum_prices(&in_range, |status| {
        matches!(status, AppointmentStatus::Scheduled | AppointmentStatus::Confirmed)
    });
    let average_ticket =
        if by_status.completed == 0 { 0.0 } else { revenue / by_status.completed as f64 };

    let mut services: HashMap<&str, ServiceSummary> = HashMap::new();
    let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for appointment in &in_range {
        let name = appointment.service.trim();
        let entry = services.entry(name).or_insert_with(|| ServiceSummary {
            service: name.to_string(),
            count: 0,
            revenue: 0.0,
        });
        entry.count += 1;
        if appointment.status == AppointmentStatus::Completed {
            entry.revenue += appointment.price;
        }
        *daily.entry(appointment.date()).or_default() += 1;
    }

    let mut services: Vec<ServiceSummary> = services.into_values().collect();
    services.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.service.cmp(&b.service)));

    Report {
        from,
        to,
        total_appointments: in_range.len(),
        by_status,
        revenue,
        expected_revenue,
        average_ticket,
        services,
        daily: daily.into_iter().map(|(date, count)| DailyCount { date, count }).collect(),
    }
}

/// Summarize `today` for the dashboard.
///
/// The next appointment is the earliest scheduled or confirmed one starting
/// at or after `now`; with no `now` every remaining one qualifies.
pub fn build_dashboard(
    today: NaiveDate,
    appointments: &[Appointment],
    now: Option<NaiveTime>,
) -> DashboardSummary {
    let todays: Vec<&Appointment> = appointments.iter().filter(|a| a.date() == today).collect();
    let active: Vec<Appointment> =
        todays.iter().filter(|a| !a.status.is_canceled()).map(|a| (*a).clone()).collect();

    let next_appointment = active
        .iter()
        .filter(|a| matches!(a.status, AppointmentStatus::Scheduled | AppointmentStatus::Confirmed))
        .filter(|a| {
            now.is_none_or(|now| {
                NaiveTime::parse_from_str(&a.start_label(), "%H:%M").is_ok_and(|start| start >= now)
            })
        })
        .min_by(|a, b| a.start_label().cmp(&b.start_label()).then(a.id.cmp(&b.id)))
        .cloned();

    DashboardSummary {
        date: today,
        total_today: todays.len(),
        by_status: todays.iter().copied().collect(),
        revenue_today: sum_prices(&todays, |status| status == AppointmentStatus::Completed),
        occupancy_percent: build_day_schedule(today, &active).occupancy_percent,
        next_appointment,
    }
}

fn sum_prices(appointments: &[&Appointment], include: impl Fn(AppointmentStatus) -> bool) -> f64 {
    appointments.iter().filter(|a| include(a.status)).map(|a| a.price).sum()
}

pub struct ReportService {
    repository: Arc<dyn AppointmentRepository>,
    store: Arc<AppointmentStore>,
}

impl ReportService {
    pub fn new(store: Arc<AppointmentStore>) -> Self {
        Self { repository: Arc::clone(store.repository()), store }
    }

    pub async fn report(&self, from: NaiveDate, to: NaiveDate) -> Result<Report> {
        if from > to {
            return Err(AgendaError::InvalidInput(format!("range start {from} is after end {to}")));
        }
        let rows = self
            .repository
            .list(&AppointmentQuery::between(from, to))
            .await
            .inspect_err(|err| error!(error = %err, %from, %to, "failed to load report data"))?;
        Ok(build_report(from, to, &rows))
    }

    /// Reload today's snapshot and summarize it.
    pub async fn dashboard(
        &self,
        today: NaiveDate,
        now: Option<NaiveTime>,
    ) -> Result<DashboardSummary> {
        let rows = self
            .store
            .reload_today(today)
            .await
            .inspect_err(|err| error!(error = %err, %today, "failed to load dashboard"))?;
        Ok(build_dashboard(today, &rows, now))
    }
}
