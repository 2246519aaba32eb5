//! Booking service - add, edit, status changes and calendar views

use std::sync::Arc;

use agenda_domain::{
    calculate_end_time, AgendaError, Appointment, AppointmentDraft, AppointmentPatch,
    AppointmentQuery, AppointmentStatus, AppointmentUpdate, DayOverview, DaySchedule,
    NewAppointment, Result,
};
use chrono::{Datelike, NaiveDate};
use tracing::{error, info, warn};

use super::ports::AppointmentRepository;
use super::store::AppointmentStore;
use super::validation;
use crate::schedule::{build_day_schedule, build_month_overview};

pub struct BookingService {
    repository: Arc<dyn AppointmentRepository>,
    store: Arc<AppointmentStore>,
}

impl BookingService {
    pub fn new(store: Arc<AppointmentStore>) -> Self {
        Self { repository: Arc::clone(store.repository()), store }
    }

    /// Validate and book a new appointment.
    ///
    /// The slot check and the insert are two separate backend calls, so two
    /// concurrent submissions for the same slot can both succeed.
    ///
    /// # Errors
    /// - `InvalidInput` when a field is missing or malformed (nothing is sent)
    /// - `Conflict` when another non-canceled appointment holds the slot
    pub async fn add_appointment(&self, new: NewAppointment) -> Result<Appointment> {
        let client_name = validation::required("client_name", &new.client_name)?;
        let phone = validation::phone(&new.phone)?;
        let service = validation::required("service", &new.service)?;
        let price = validation::price(new.price)?;
        let (start_label, start) = validation::start_time(&new.start_time)?;
        let duration = validation::duration(new.duration_minutes)?;
        let end_time = calculate_end_time(&start_label, duration)?;

        if !new.status.is_canceled() {
            self.ensure_slot_free(new.date, &start_label, None).await?;
        }

        let draft = AppointmentDraft {
            client_name,
            phone,
            service,
            price,
            scheduled_at: new.date.and_time(start),
            start_time: start_label,
            end_time: Some(end_time),
            status: new.status,
            notes: validation::notes(new.notes),
        };

        let created = self.repository.insert(draft).await.inspect_err(|err| {
            error!(error = %err, date = %new.date, "failed to insert appointment");
        })?;

        info!(
            id = created.id,
            date = %created.date(),
            start = %created.start_time,
            "appointment booked"
        );
        Ok(created)
    }

    /// Apply an edit-form update.
    ///
    /// Moving the appointment (date, start or duration) recomputes the end
    /// time; the existing duration is kept unless a new one is given. Blank
    /// notes clear the column.
    pub async fn update_appointment(
        &self,
        id: i64,
        update: AppointmentUpdate,
    ) -> Result<Appointment> {
        let current = self.get_appointment(id).await?;

        let mut patch = AppointmentPatch {
            client_name: update
                .client_name
                .as_deref()
                .map(|name| validation::required("client_name", name))
                .transpose()?,
            phone: update.phone.as_deref().map(validation::phone).transpose()?,
            service: update
                .service
                .as_deref()
                .map(|service| validation::required("service", service))
                .transpose()?,
            price: update.price.map(validation::price).transpose()?,
            status: update.status,
            notes: update.notes.map(|notes| validation::notes(Some(notes))),
            ..AppointmentPatch::default()
        };

        let moved = update.date.is_some()
            || update.start_time.is_some()
            || update.duration_minutes.is_some();
        let date = update.date.unwrap_or_else(|| current.date());
        let (start_label, start) = match update.start_time.as_deref() {
            Some(value) => validation::start_time(value)?,
            None => validation::start_time(&current.start_label())?,
        };

        if moved {
            let minutes = update.duration_minutes.unwrap_or_else(|| current.duration_minutes());
            let duration = validation::duration(minutes)?;
            patch.end_time = Some(calculate_end_time(&start_label, duration)?);
            patch.scheduled_at = Some(date.and_time(start));
            patch.start_time = Some(start_label.clone());
        }

        let status = patch.status.unwrap_or(current.status);
        let slot_changed = date != current.date() || start_label != current.start_label();
        let revived = current.status.is_canceled() && !status.is_canceled();
        if !status.is_canceled() && (slot_changed || revived) {
            self.ensure_slot_free(date, &start_label, Some(id)).await?;
        }

        if patch.is_empty() {
            return Ok(current);
        }

        let updated = self.repository.update(id, patch).await.inspect_err(|err| {
            error!(error = %err, id, "failed to update appointment");
        })?;
        info!(id, "appointment updated");
        Ok(updated)
    }

    /// Explicit status change; any status may move to any other.
    ///
    /// Reviving a canceled appointment needs its slot to be free.
    pub async fn set_status(&self, id: i64, status: AppointmentStatus) -> Result<Appointment> {
        let current = self.get_appointment(id).await?;
        if current.status.is_canceled() && !status.is_canceled() {
            self.ensure_slot_free(current.date(), &current.start_label(), Some(id)).await?;
        }

        let updated = self
            .repository
            .update(id, AppointmentPatch::status(status))
            .await
            .inspect_err(|err| error!(error = %err, id, %status, "failed to change status"))?;
        info!(id, %status, "appointment status changed");
        Ok(updated)
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<()> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|err| error!(error = %err, id, "failed to delete appointment"))?;
        info!(id, "appointment deleted");
        Ok(())
    }

    pub async fn get_appointment(&self, id: i64) -> Result<Appointment> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AgendaError::NotFound(format!("appointment {id} not found")))
    }

    /// Slot grid for one day; canceled appointments free their slot.
    pub async fn day_schedule(&self, date: NaiveDate) -> Result<DaySchedule> {
        let rows = self.active_between(date, date).await?;
        Ok(build_day_schedule(date, &rows))
    }

    pub async fn month_overview(&self, year: i32, month: u32) -> Result<Vec<DayOverview>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AgendaError::InvalidInput(format!("invalid month {year}-{month:02}")))?;
        let last = first
            .iter_days()
            .take_while(|day| day.month() == month)
            .last()
            .unwrap_or(first);
        let rows = self.active_between(first, last).await?;
        build_month_overview(year, month, &rows)
    }

    /// Appointment table load; results are kept in the store snapshot.
    pub async fn list_appointments(
        &self,
        query: &AppointmentQuery,
    ) -> Result<Arc<Vec<Appointment>>> {
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from > to {
                return Err(AgendaError::InvalidInput(format!(
                    "range start {from} is after end {to}"
                )));
            }
        }
        self.store
            .reload(query)
            .await
            .inspect_err(|err| error!(error = %err, "failed to load appointments"))
    }

    pub async fn today(&self, today: NaiveDate) -> Result<Arc<Vec<Appointment>>> {
        self.store
            .reload_today(today)
            .await
            .inspect_err(|err| error!(error = %err, %today, "failed to load today's appointments"))
    }

    async fn active_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Appointment>> {
        let mut rows = self.repository.list(&AppointmentQuery::between(from, to)).await?;
        rows.retain(|appointment| !appointment.status.is_canceled());
        Ok(rows)
    }

    async fn ensure_slot_free(
        &self,
        date: NaiveDate,
        start_label: &str,
        ignore_id: Option<i64>,
    ) -> Result<()> {
        let existing = self.repository.list(&AppointmentQuery::on(date)).await?;
        let clash = existing.iter().find(|appointment| {
            Some(appointment.id) != ignore_id
                && !appointment.status.is_canceled()
                && appointment.start_label() == start_label
        });

        match clash {
            Some(taken) => {
                warn!(%date, start = start_label, taken_by = taken.id, "slot already booked");
                Err(AgendaError::Conflict(format!(
                    "{start_label} on {date} is already booked for {}",
                    taken.client_name
                )))
            }
            None => Ok(()),
        }
    }
}
