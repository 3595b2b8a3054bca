//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies. Most
//! workflows never reach this layer: validation, not-found, and store
//! failures are folded into `ActionOutcome` messages inside the handler.
//! What does surface here is the one transport-level distinction the API
//! makes, the 401 for unauthenticated admin calls, plus the generic 4xx/5xx
//! mapping for read endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use seenfit_core::errors::StudioError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// Wraps domain [`StudioError`] instances and implements `IntoResponse` to
/// convert them into HTTP responses with appropriate status codes and JSON
/// payloads.
#[derive(Debug)]
pub struct AppError(pub StudioError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            StudioError::NotFound(_) => StatusCode::NOT_FOUND,
            StudioError::Validation(_) => StatusCode::BAD_REQUEST,
            StudioError::Authentication(_) => StatusCode::UNAUTHORIZED,
            StudioError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StudioError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StudioError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, StudioError>` in
/// handlers that return `Result<T, AppError>`.
impl From<StudioError> for AppError {
    fn from(err: StudioError) -> Self {
        AppError(err)
    }
}

/// Wraps plumbing-level failures as store errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(StudioError::Database(err))
    }
}

/// Maps a StudioError directly to an HTTP response.
pub fn map_error(err: StudioError) -> Response {
    AppError(err).into_response()
}
