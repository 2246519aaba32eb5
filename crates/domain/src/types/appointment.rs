//! Appointment types
//!
//! `Appointment` mirrors one row of the remote `agendamentos` table. The
//! in-process copies are transient caches; the table owns the data.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DURATION_MINUTES;
use crate::impl_domain_status_conversions;
use crate::utils::phone::{normalize_phone, phones_match};
use crate::utils::time::{format_time, minutes_between, parse_hhmm};

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Canceled,
}

impl_domain_status_conversions!(AppointmentStatus {
    Scheduled => "scheduled" | "agendado" | "agendada",
    Confirmed => "confirmed" | "confirmado" | "confirmada",
    Completed => "completed" | "concluido" | "concluído" | "concluida" | "finalizado",
    Canceled => "canceled" | "cancelled" | "cancelado" | "cancelada",
});

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::Confirmed, Self::Completed, Self::Canceled];

    pub fn is_canceled(self) -> bool {
        matches!(self, Self::Canceled)
    }
}

/// One row of the appointments table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub client_name: String,
    pub phone: String,
    pub service: String,
    #[serde(default, deserialize_with = "price_or_zero")]
    pub price: f64,
    #[serde(with = "naive_datetime")]
    pub scheduled_at: NaiveDateTime,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Appointment {
    /// Calendar day of the booking.
    pub fn date(&self) -> NaiveDate {
        self.scheduled_at.date()
    }

    /// Start time as `HH:MM`.
    ///
    /// Uses the `start_time` column when it normalizes to a valid time and
    /// falls back to the time component of `scheduled_at`.
    pub fn start_label(&self) -> String {
        let label = format_time(&self.start_time);
        if parse_hhmm(&label).is_ok() {
            label
        } else {
            self.scheduled_at.format("%H:%M").to_string()
        }
    }

    /// End time as `HH:MM`, when recorded.
    pub fn end_label(&self) -> Option<String> {
        self.end_time.as_deref().map(format_time).filter(|label| parse_hhmm(label).is_ok())
    }

    /// Booked duration; defaults when the end time is missing or malformed.
    pub fn duration_minutes(&self) -> u32 {
        self.end_label()
            .and_then(|end| minutes_between(&self.start_label(), &end))
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }

    pub fn normalized_phone(&self) -> String {
        normalize_phone(&self.phone)
    }
}

/// Booking request as entered in the add form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub client_name: String,
    pub phone: String,
    pub service: String,
    #[serde(default)]
    pub price: f64,
    pub date: NaiveDate,
    pub start_time: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Edit-form payload; only provided fields change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Validated row ready to be inserted (no id yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub client_name: String,
    pub phone: String,
    pub service: String,
    pub price: f64,
    #[serde(with = "naive_datetime")]
    pub scheduled_at: NaiveDateTime,
    pub start_time: String,
    pub end_time: Option<String>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl AppointmentDraft {
    /// Materialize the draft under a backend-assigned id.
    pub fn into_appointment(self, id: i64) -> Appointment {
        Appointment {
            id,
            client_name: self.client_name,
            phone: self.phone,
            service: self.service,
            price: self.price,
            scheduled_at: self.scheduled_at,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
            notes: self.notes,
        }
    }
}

/// Column-level patch sent to the repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "naive_datetime::option")]
    pub scheduled_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    /// `Some(None)` clears the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the patch to an in-memory copy.
    pub fn apply_to(&self, appointment: &mut Appointment) {
        if let Some(value) = &self.client_name {
            appointment.client_name = value.clone();
        }
        if let Some(value) = &self.phone {
            appointment.phone = value.clone();
        }
        if let Some(value) = &self.service {
            appointment.service = value.clone();
        }
        if let Some(value) = self.price {
            appointment.price = value;
        }
        if let Some(value) = self.scheduled_at {
            appointment.scheduled_at = value;
        }
        if let Some(value) = &self.start_time {
            appointment.start_time = value.clone();
        }
        if let Some(value) = &self.end_time {
            appointment.end_time = Some(value.clone());
        }
        if let Some(value) = self.status {
            appointment.status = value;
        }
        if let Some(value) = &self.notes {
            appointment.notes = value.clone();
        }
    }
}

/// Ordering on `scheduled_at`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Filter for repository selects
///
/// Maps onto the table's `gte`/`lte`/`eq` filters: `from`/`to` bound the date
/// of `scheduled_at` inclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
    pub phone: Option<String>,
    pub order: SortOrder,
    pub limit: Option<usize>,
}

impl AppointmentQuery {
    pub fn all() -> Self {
        Self::default()
    }

    /// Appointments on a single day.
    pub fn on(date: NaiveDate) -> Self {
        Self::between(date, date)
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from: Some(from), to: Some(to), ..Self::default() }
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to one client; the phone is normalized here.
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(normalize_phone(phone));
        self
    }

    pub fn descending(mut self) -> Self {
        self.order = SortOrder::Descending;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Evaluate the filter locally (ordering and limit excluded).
    pub fn matches(&self, appointment: &Appointment) -> bool {
        let date = appointment.date();
        self.from.is_none_or(|from| date >= from)
            && self.to.is_none_or(|to| date <= to)
            && self.status.is_none_or(|status| appointment.status == status)
            && self.phone.as_deref().is_none_or(|phone| phones_match(phone, &appointment.phone))
    }

    /// Sort and truncate a result set the way the backend would.
    pub fn arrange(&self, appointments: &mut Vec<Appointment>) {
        appointments.sort_by(|a, b| {
            let ordering = a.scheduled_at.cmp(&b.scheduled_at).then(a.id.cmp(&b.id));
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        if let Some(limit) = self.limit {
            appointments.truncate(limit);
        }
    }
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

/// A `null` price reads as zero.
fn price_or_zero<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helpers for `scheduled_at`
///
/// Reads naive ISO, space-separated and RFC 3339 timestamps (keeping the wall
/// clock as written); always writes `YYYY-MM-DDTHH:MM:SS`.
pub mod naive_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::utils::time::parse_datetime;

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{de, Deserialize, Deserializer, Serializer};

        use crate::utils::time::parse_datetime;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|raw| {
                parse_datetime(&raw)
                    .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
            })
            .transpose()
        }
    }
}
