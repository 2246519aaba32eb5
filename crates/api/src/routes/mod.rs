//! HTTP routes - JSON surface over the application context
//!
//! Login and health are public; every other route sits behind the session
//! guard and answers 401 without a logged-in user.

pub mod appointments;
pub mod auth;
pub mod calendar;
pub mod clients;
pub mod health;
pub mod reports;

use std::sync::Arc;

use agenda_domain::AgendaError;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use chrono::NaiveDate;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::utils::logging::log_requests;

/// Build the application router with all endpoints.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let protected = Router::new()
        .route("/api/logout", post(auth::logout))
        .route("/api/session", get(auth::current_session))
        .route("/api/dashboard", get(reports::dashboard))
        .route("/api/calendar", get(calendar::month_calendar))
        .route("/api/calendar/{date}", get(calendar::day_calendar))
        .route(
            "/api/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/api/appointments/{id}",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        )
        .route("/api/appointments/{id}/status", patch(appointments::update_appointment_status))
        .route("/api/clients", get(clients::list_clients))
        .route("/api/clients/{phone}", delete(clients::delete_client))
        .route("/api/clients/{phone}/appointments", get(clients::client_history))
        .route("/api/reports", get(reports::period_report))
        .route_layer(middleware::from_fn_with_state(Arc::clone(&ctx), require_session));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/login", post(auth::login))
        .merge(protected)
        .route_layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Reject the request with 401 unless a user is logged in.
///
/// The user is made available to handlers as an `Extension<SessionUser>`.
async fn require_session(
    State(ctx): State<Arc<AppContext>>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let user = ctx.auth.require_user().await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// `?confirm=true`, required on destructive routes
#[derive(Debug, Default, Deserialize)]
pub struct Confirm {
    #[serde(default)]
    pub confirm: bool,
}

impl Confirm {
    fn require(&self, what: &str) -> ApiResult<()> {
        if self.confirm {
            Ok(())
        } else {
            Err(ApiError(AgendaError::InvalidInput(format!(
                "deleting {what} requires confirm=true"
            ))))
        }
    }
}

/// Treat `?from=` like an absent parameter.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// `YYYY-MM-DD`
pub(crate) fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ApiError(AgendaError::InvalidInput(format!("invalid date '{raw}', expected YYYY-MM-DD")))
    })
}

pub(crate) fn parse_optional_date(raw: Option<String>) -> ApiResult<Option<NaiveDate>> {
    non_empty(raw).map(|raw| parse_date(&raw)).transpose()
}
