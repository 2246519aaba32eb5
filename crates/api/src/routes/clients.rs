//! Client directory derived from appointments

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{non_empty, Confirm};
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::views::{appointment_views, AppointmentView, ClientView};

#[derive(Debug, Default, Deserialize)]
pub struct ClientSearch {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClientDeleted {
    /// Appointments removed with the client
    pub deleted: usize,
}

pub async fn list_clients(
    State(ctx): State<Arc<AppContext>>,
    search: Result<Query<ClientSearch>, QueryRejection>,
) -> ApiResult<Json<Vec<ClientView>>> {
    let Query(search) = search?;
    let search = non_empty(search.search);
    let clients = ctx.clients.list(search.as_deref()).await?;
    Ok(Json(clients.into_iter().map(ClientView::from).collect()))
}

/// Every appointment of the client, newest first.
pub async fn client_history(
    State(ctx): State<Arc<AppContext>>,
    Path(phone): Path<String>,
) -> ApiResult<Json<Vec<AppointmentView>>> {
    let history = ctx.clients.history(&phone).await?;
    Ok(Json(appointment_views(&history)))
}

/// Delete the client together with all of their appointments.
pub async fn delete_client(
    State(ctx): State<Arc<AppContext>>,
    Path(phone): Path<String>,
    confirm: Result<Query<Confirm>, QueryRejection>,
) -> ApiResult<Json<ClientDeleted>> {
    let Query(confirm) = confirm?;
    confirm.require("a client")?;
    let deleted = ctx.clients.delete(&phone).await?;
    Ok(Json(ClientDeleted { deleted }))
}
