//! Period report and today's dashboard

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Datelike;
use serde::Deserialize;

use super::parse_optional_date;
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::views::{DashboardView, ReportView};

/// `from` defaults to the first of the current month, `to` to today
#[derive(Debug, Default, Deserialize)]
pub struct ReportRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub date: Option<String>,
}

pub async fn period_report(
    State(ctx): State<Arc<AppContext>>,
    range: Result<Query<ReportRange>, QueryRejection>,
) -> ApiResult<Json<ReportView>> {
    let Query(range) = range?;
    let today = ctx.today();
    let from =
        parse_optional_date(range.from)?.unwrap_or_else(|| today.with_day(1).unwrap_or(today));
    let to = parse_optional_date(range.to)?.unwrap_or(today);
    let report = ctx.reports.report(from, to).await?;
    Ok(Json(ReportView::from(report)))
}

/// Summary of one day, today unless `?date=` is given.
///
/// The next appointment is picked after the current time only for today.
pub async fn dashboard(
    State(ctx): State<Arc<AppContext>>,
    params: Result<Query<DashboardParams>, QueryRejection>,
) -> ApiResult<Json<DashboardView>> {
    let Query(params) = params?;
    let today = ctx.today();
    let date = parse_optional_date(params.date)?.unwrap_or(today);
    let now = (date == today).then(|| ctx.now());
    let summary = ctx.reports.dashboard(date, now).await?;
    Ok(Json(DashboardView::from(summary)))
}
