use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use vigil_core::error::{ValidationError, ValidationFailure};

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// Input failed invariant validation; the caller corrects and retries.
    Unprocessable(Vec<ValidationError>),
    #[allow(dead_code)]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    problems: Vec<ValidationError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, problems) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::Unprocessable(problems) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "input validation failed".to_string(),
                problems,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error: message, problems })).into_response()
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        ApiError::Unprocessable(failure.problems)
    }
}

impl From<ValidationError> for ApiError {
    fn from(problem: ValidationError) -> Self {
        ApiError::Unprocessable(vec![problem])
    }
}
