//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use agenda_domain::AgendaError;
use reqwest::{Error as HttpError, StatusCode};
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AgendaError);

impl From<InfraError> for AgendaError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AgendaError> for InfraError {
    fn from(value: AgendaError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAgendaError {
    fn into_agenda(self) -> AgendaError;
}

/// Map a non-success backend status to a domain error.
///
/// `detail` is the backend's own message when it sent one.
pub fn status_error(status: StatusCode, detail: Option<&str>) -> AgendaError {
    let code = status.as_u16();
    let mut message =
        format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    if let Some(detail) = detail.map(str::trim).filter(|d| !d.is_empty()) {
        message.push_str(": ");
        message.push_str(detail);
    }

    match code {
        401 | 403 => AgendaError::Auth(message),
        404 => AgendaError::NotFound(message),
        409 => AgendaError::Conflict(message),
        400..=499 => AgendaError::InvalidInput(message),
        500..=599 => AgendaError::Backend(message),
        _ => AgendaError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for HttpError {
    fn into_agenda(self) -> AgendaError {
        if self.is_timeout() {
            return AgendaError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return AgendaError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_error(status, None);
        }

        if self.is_decode() {
            return AgendaError::Backend(format!("unexpected response body: {self}"));
        }

        if self.is_builder() {
            return AgendaError::Config(format!("invalid HTTP request: {self}"));
        }

        AgendaError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for JsonError {
    fn into_agenda(self) -> AgendaError {
        AgendaError::Internal(format!("JSON error at line {}: {self}", self.line()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for IoError {
    fn into_agenda(self) -> AgendaError {
        match self.kind() {
            ErrorKind::NotFound => AgendaError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                AgendaError::Config(format!("permission denied: {self}"))
            }
            _ => AgendaError::Internal(format!("I/O error: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
