use axum::http::StatusCode;

use crate::app::errors::ApiError;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Unmatched routes get the same JSON error body as every other failure.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
