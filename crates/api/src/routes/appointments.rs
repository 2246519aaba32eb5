//! Appointment table and add/edit/status/delete actions

use std::sync::Arc;

use agenda_domain::{
    AgendaError, AppointmentQuery, AppointmentStatus, AppointmentUpdate, NewAppointment,
};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::{non_empty, parse_optional_date, Confirm};
use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::views::{appointment_views, AppointmentView};

/// Table filters; empty values are ignored
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub status: Option<String>,
    pub phone: Option<String>,
}

impl AppointmentFilter {
    fn into_query(self) -> ApiResult<AppointmentQuery> {
        let mut query = AppointmentQuery {
            from: parse_optional_date(self.from)?,
            to: parse_optional_date(self.to)?,
            ..AppointmentQuery::all()
        };
        if let Some(status) = non_empty(self.status) {
            let status: AppointmentStatus =
                status.parse().map_err(|e| ApiError(AgendaError::InvalidInput(e)))?;
            query = query.with_status(status);
        }
        if let Some(phone) = non_empty(self.phone) {
            query = query.with_phone(&phone);
        }
        Ok(query)
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: AppointmentStatus,
}

pub async fn list_appointments(
    State(ctx): State<Arc<AppContext>>,
    filter: Result<Query<AppointmentFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<AppointmentView>>> {
    let Query(filter) = filter?;
    let query = filter.into_query()?;
    let rows = ctx.bookings.list_appointments(&query).await?;
    Ok(Json(appointment_views(&rows)))
}

pub async fn create_appointment(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<NewAppointment>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AppointmentView>)> {
    let Json(new) = payload?;
    let created = ctx.bookings.add_appointment(new).await?;
    Ok((StatusCode::CREATED, Json(AppointmentView::from(created))))
}

pub async fn get_appointment(
    State(ctx): State<Arc<AppContext>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<AppointmentView>> {
    let Path(id) = id?;
    let appointment = ctx.bookings.get_appointment(id).await?;
    Ok(Json(AppointmentView::from(appointment)))
}

pub async fn update_appointment(
    State(ctx): State<Arc<AppContext>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AppointmentUpdate>, JsonRejection>,
) -> ApiResult<Json<AppointmentView>> {
    let Path(id) = id?;
    let Json(update) = payload?;
    let updated = ctx.bookings.update_appointment(id, update).await?;
    Ok(Json(AppointmentView::from(updated)))
}

pub async fn update_appointment_status(
    State(ctx): State<Arc<AppContext>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StatusChange>, JsonRejection>,
) -> ApiResult<Json<AppointmentView>> {
    let Path(id) = id?;
    let Json(change) = payload?;
    let updated = ctx.bookings.set_status(id, change.status).await?;
    Ok(Json(AppointmentView::from(updated)))
}

pub async fn delete_appointment(
    State(ctx): State<Arc<AppContext>>,
    id: Result<Path<i64>, PathRejection>,
    confirm: Result<Query<Confirm>, QueryRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    let Query(confirm) = confirm?;
    confirm.require("an appointment")?;
    ctx.bookings.delete_appointment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
