use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Set to `1` to emit JSON log lines instead of the human-readable format.
pub const LOG_JSON_ENV: &str = "AGENDA_LOG_JSON";

const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info`. Calling this twice
/// is harmless: the second installation fails silently.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var(LOG_JSON_ENV).is_ok_and(|value| value == "1");

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if installed.is_err() {
        warn!("tracing subscriber already installed");
    }
}

/// Log the outcome of a route execution with structured fields.
///
/// # Parameters
/// * `route` - Matched route template (e.g. `"/api/appointments/{id}"`).
/// * `method` - HTTP method.
/// * `status` - Response status code.
/// * `elapsed` - Time spent handling the request.
///
/// Route templates never carry path values, so phones and ids stay out of the
/// log line.
#[inline]
pub fn log_route_execution(route: &str, method: &str, status: u16, elapsed: Duration) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let success = status < 400;

    if success {
        info!(route, method, status, duration_ms, success, "route_execution_success");
    } else {
        warn!(route, method, status, duration_ms, success, "route_execution_failure");
    }
}

/// Middleware timing every request and handing it to `log_route_execution`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "<unmatched>".to_string(), |path| path.as_str().to_string());
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    log_route_execution(&route, &method, response.status().as_u16(), start.elapsed());
    response
}
