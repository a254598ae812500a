//! Response builders shared by the handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::errors::SummaryError;

/// Returns the JSON error body for a message. `detail` is the key the frontend reads.
#[must_use]
pub fn err_body(message: &str) -> Value {
    json!({ "detail": message })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    (status, Json(err_body(message))).into_response()
}

impl IntoResponse for SummaryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_provider_failure() || status.is_server_error() {
            error!(status = status.as_u16(), error = ?self, "Summary generation failed: {}", self);
        } else {
            warn!(status = status.as_u16(), "Rejected summary request: {}", self);
        }
        err_response(status, &self.to_string())
    }
}
