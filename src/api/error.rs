use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::circuit::CircuitError;

/// API error types that can be returned from handlers
///
/// Every rejection this service produces is an input problem: a missing or
/// malformed field at the boundary, or a value the formula library refuses.
/// Both surface to the client as the same `InvalidInput` kind.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Error response that gets serialized to JSON
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error type string
    fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "InvalidInput",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type();

        tracing::debug!(error = %self, "Client error");

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<CircuitError> for ApiError {
    fn from(error: CircuitError) -> Self {
        match error {
            CircuitError::InvalidInput(reason) => ApiError::InvalidInput(reason),
        }
    }
}
