//! Day slot grid and month overview

use std::sync::Arc;

use agenda_domain::{DayOverview, DaySchedule};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Datelike;
use serde::Deserialize;

use super::parse_date;
use crate::context::AppContext;
use crate::error::ApiResult;

/// Defaults to the current month
#[derive(Debug, Default, Deserialize)]
pub struct MonthParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub async fn day_calendar(
    State(ctx): State<Arc<AppContext>>,
    Path(date): Path<String>,
) -> ApiResult<Json<DaySchedule>> {
    let date = parse_date(&date)?;
    Ok(Json(ctx.bookings.day_schedule(date).await?))
}

pub async fn month_calendar(
    State(ctx): State<Arc<AppContext>>,
    params: Result<Query<MonthParams>, QueryRejection>,
) -> ApiResult<Json<Vec<DayOverview>>> {
    let Query(params) = params?;
    let today = ctx.today();
    let year = params.year.unwrap_or_else(|| today.year());
    let month = params.month.unwrap_or_else(|| today.month());
    Ok(Json(ctx.bookings.month_overview(year, month).await?))
}
