use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use studbook_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] with these body shapes:
///
/// - 404 / 400 (`NotFound`, `Validation`, `BadRequest`): the message as a
///   bare JSON string.
/// - 403 (`Forbidden`): `{ "error": <message> }`.
/// - 401 (`Unauthorized`): `{ "error": <message>, "code": "UNAUTHORIZED" }`.
/// - 500 (`Internal`, `Database`): `{ "error": <sanitized>, "code": "INTERNAL_ERROR" }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `studbook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (path, query or body) with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
                CoreError::Unauthorized(msg) => (
                    StatusCode::UNAUTHORIZED,
                    json!({ "error": msg, "code": "UNAUTHORIZED" }),
                ),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized 500 payload. The cause is logged by the caller, never returned.
fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        }),
    )
}
