//! Display-ready JSON shapes
//!
//! Domain values are flattened into the response and decorated with the
//! pt-BR strings the dashboard shows verbatim.

use agenda_domain::utils::display::{format_date_br, format_price_brl, format_time_range};
use agenda_domain::{format_phone_display, Appointment, Client, DashboardSummary, Report};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub date: String,
    pub date_display: String,
    pub phone_display: String,
    /// `09:00 - 09:30`
    pub time_range: String,
    /// `R$ 35,00`
    pub price_display: String,
}

impl From<&Appointment> for AppointmentView {
    fn from(appointment: &Appointment) -> Self {
        let start = appointment.start_label();
        let end = appointment.end_label();
        Self {
            date: appointment.date().to_string(),
            date_display: format_date_br(appointment.date()),
            phone_display: format_phone_display(&appointment.phone),
            time_range: format_time_range(&start, end.as_deref()),
            price_display: format_price_brl(appointment.price),
            appointment: appointment.clone(),
        }
    }
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        Self::from(&appointment)
    }
}

pub fn appointment_views(appointments: &[Appointment]) -> Vec<AppointmentView> {
    appointments.iter().map(AppointmentView::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientView {
    #[serde(flatten)]
    pub client: Client,
    pub total_spent_display: String,
    pub last_appointment_display: Option<String>,
}

impl From<Client> for ClientView {
    fn from(client: Client) -> Self {
        Self {
            total_spent_display: format_price_brl(client.total_spent),
            last_appointment_display: client.last_appointment.map(format_date_br),
            client,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub revenue_today_display: String,
    pub next_appointment_view: Option<AppointmentView>,
}

impl From<DashboardSummary> for DashboardView {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            revenue_today_display: format_price_brl(summary.revenue_today),
            next_appointment_view: summary.next_appointment.as_ref().map(AppointmentView::from),
            summary,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    #[serde(flatten)]
    pub report: Report,
    pub revenue_display: String,
    pub expected_revenue_display: String,
    pub average_ticket_display: String,
}

impl From<Report> for ReportView {
    fn from(report: Report) -> Self {
        Self {
            revenue_display: format_price_brl(report.revenue),
            expected_revenue_display: format_price_brl(report.expected_revenue),
            average_ticket_display: format_price_brl(report.average_ticket),
            report,
        }
    }
}
