//! Client error taxonomy
//!
//! Two failure classes exist at this boundary: the request never completed
//! (transport) or the server answered with a non-success status (rejected).
//! Rejected responses carry their parsed payload so the error mapper can
//! turn it into a summary and per-field messages.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crewdesk_forms::server_error::{map_server_error, MappedError};
use crewdesk_forms::messages;

/// Which microservice a call was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Employees,
    Attendance,
}

impl Service {
    /// Fixed connectivity message shown when the service is unreachable.
    pub fn connection_message(self) -> &'static str {
        match self {
            Service::Employees => messages::CONNECTION_EMPLOYEES,
            Service::Attendance => messages::CONNECTION_ATTENDANCE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not complete (connection refused, timeout, bad
    /// body). Reported as a generic per-service connectivity message.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server rejected request with status {status}")]
    Rejected { status: StatusCode, payload: Value },
}

impl ApiError {
    /// Runs a rejected payload through the error mapper.
    pub fn mapped(&self) -> Option<MappedError> {
        match self {
            ApiError::Rejected { payload, .. } => Some(map_server_error(payload)),
            ApiError::Transport(_) => None,
        }
    }

    /// Single banner message for this failure.
    pub fn user_message(&self, service: Service) -> String {
        match self.mapped() {
            Some(mapped) => mapped.summary,
            None => service.connection_message().to_string(),
        }
    }
}

/// Parses a non-success response body: JSON when possible, the raw text as
/// a string payload otherwise, `Null` when the body is empty (which the
/// mapper reports as an unknown server error).
pub fn parse_error_payload(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn raw_string_body_becomes_the_summary() {
        // A delete answered with 404 and a bare "Not found" body.
        let err = ApiError::Rejected {
            status: StatusCode::NOT_FOUND,
            payload: parse_error_payload("Not found"),
        };
        assert_eq!(err.user_message(Service::Employees), "Not found");
    }

    #[test]
    fn json_string_body_is_unquoted() {
        let err = ApiError::Rejected {
            status: StatusCode::NOT_FOUND,
            payload: parse_error_payload("\"Not found\""),
        };
        assert_eq!(err.user_message(Service::Employees), "Not found");
    }

    #[test]
    fn field_errors_are_mapped() {
        let err = ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            payload: json!({"email": ["Este email ya está registrado"]}),
        };
        let mapped = err.mapped().unwrap();
        assert_eq!(
            mapped.field_messages,
            vec![(
                "email".to_string(),
                "Este email ya está registrado".to_string()
            )]
        );
        assert!(mapped.summary.contains("Email: Este email ya está registrado"));
    }

    #[test]
    fn empty_body_maps_to_unknown_error() {
        let err = ApiError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            payload: parse_error_payload("  "),
        };
        assert_eq!(
            err.user_message(Service::Attendance),
            messages::UNKNOWN_SERVER_ERROR
        );
    }

    #[test]
    fn connection_messages_are_per_service() {
        assert_eq!(
            Service::Employees.connection_message(),
            "Error de conexión con el servidor de empleados"
        );
        assert_eq!(
            Service::Attendance.connection_message(),
            "Error de conexión con el servidor de asistencias"
        );
    }
}
