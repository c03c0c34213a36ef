//! Maps the core error taxonomy onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rolodex::Error;
use serde_json::json;

/// HTTP-facing wrapper around [`rolodex::Error`].
///
/// Validation and payload-shape failures are the client's fault (400),
/// uniqueness violations are conflicts (409), and an unreachable store is
/// a service-side outage (503). Bodies are always `{"message": "..."}`.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::MissingField { .. }
            | Error::InvalidField { .. }
            | Error::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
            Error::DuplicateEmail { .. } | Error::DuplicateClientId { .. } => StatusCode::CONFLICT,
            Error::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }

        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}
