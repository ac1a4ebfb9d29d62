//! Translation of domain failures into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use catalog_core::DomainError;

const NOT_FOUND_MESSAGE: &str = "Resource not found.";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred.";

/// Error returned by handlers. Wraps a [`DomainError`] and renders it as
/// `{"error": <message>, "status": <code>}`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn not_found() -> Self {
        Self(DomainError::not_found(NOT_FOUND_MESSAGE))
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self(DomainError::invalid_argument(msg))
    }

    /// Status code and client-facing message. Internal details never leave here.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            DomainError::InvalidArgument(msg)
            | DomainError::Validation(msg)
            | DomainError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DomainError::InvalidId(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            DomainError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self.0, "unhandled error");
        } else {
            tracing::warn!(error = %self.0, status = status.as_u16(), "request failed");
        }

        json_error(status, message)
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "status": status.as_u16(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapped(err: DomainError) -> (StatusCode, String) {
        ApiError::from(err).status_and_message()
    }

    #[test]
    fn not_found_hides_detail() {
        assert_eq!(
            mapped(DomainError::not_found("Entity with Id 4 not found.")),
            (StatusCode::NOT_FOUND, "Resource not found.".to_string())
        );
    }

    #[test]
    fn client_errors_are_bad_request_with_message() {
        for err in [
            DomainError::invalid_argument("category is required"),
            DomainError::validation("Product name is required."),
            DomainError::conflict("Entity with Id 1 already exists."),
        ] {
            let expected = err.to_string();
            assert_eq!(mapped(err), (StatusCode::BAD_REQUEST, expected));
        }
        assert_eq!(mapped(DomainError::invalid_id("x")).0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_are_generic() {
        assert_eq!(
            mapped(DomainError::internal("lock poisoned")),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred.".to_string()
            )
        );
    }
}
