use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::context::AppContext;

/// Application health
///
/// # Example Response
/// ```json
/// {
///   "is_healthy": true,
///   "score": 1.0,
///   "backend": "memory",
///   "components": [
///     { "name": "repository", "is_healthy": true, "message": null },
///     { "name": "sessions", "is_healthy": true, "message": null }
///   ],
///   "timestamp": 1715688000
/// }
/// ```
pub async fn health_check(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    let status = ctx.health_check().await;
    let code = if status.is_healthy { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(status))
}
