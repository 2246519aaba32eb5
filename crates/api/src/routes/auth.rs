use std::sync::Arc;

use agenda_domain::{Credentials, SessionUser};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::context::AppContext;
use crate::error::ApiResult;

/// Verify credentials and persist the session user.
pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<SessionUser>> {
    let Json(credentials) = payload?;
    let user = ctx.auth.login(&credentials).await?;
    Ok(Json(user))
}

pub async fn logout(State(ctx): State<Arc<AppContext>>) -> ApiResult<StatusCode> {
    ctx.auth.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn current_session(Extension(user): Extension<SessionUser>) -> Json<SessionUser> {
    Json(user)
}
