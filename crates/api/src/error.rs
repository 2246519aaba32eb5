//! HTTP rendering of `AgendaError`

use agenda_domain::AgendaError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Route-level error: a domain error rendered as `{"error": "<message>"}`
#[derive(Debug)]
pub struct ApiError(pub AgendaError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AgendaError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AgendaError::Auth(_) => StatusCode::UNAUTHORIZED,
            AgendaError::NotFound(_) => StatusCode::NOT_FOUND,
            AgendaError::Conflict(_) => StatusCode::CONFLICT,
            AgendaError::Network(_) | AgendaError::Backend(_) => StatusCode::BAD_GATEWAY,
            AgendaError::Config(_) | AgendaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The free-text message without the kind prefix.
    pub fn message(&self) -> &str {
        match &self.0 {
            AgendaError::Backend(message)
            | AgendaError::Config(message)
            | AgendaError::Network(message)
            | AgendaError::Auth(message)
            | AgendaError::NotFound(message)
            | AgendaError::InvalidInput(message)
            | AgendaError::Conflict(message)
            | AgendaError::Internal(message) => message,
        }
    }
}

impl From<AgendaError> for ApiError {
    fn from(err: AgendaError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AgendaError::InvalidInput(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AgendaError::InvalidInput(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AgendaError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(kind = self.0.label(), error = %self.0, "request failed");
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
