use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use trivia_core::error::CoreError;
use trivia_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce the `{ success, error, message }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the storage layer on a read.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Malformed input payload, path or query.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a failed create/update/delete.
    ///
    /// Mutations report 422 whatever the underlying cause.
    pub fn mutation_failed(err: impl Display) -> Self {
        AppError::Core(CoreError::Unprocessable(err.to_string()))
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. })
            | AppError::Core(CoreError::NoneAvailable { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Unprocessable(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(StoreError::Database(sqlx::Error::RowNotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Store(StoreError::UnknownCategory(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// Client-facing message for a status code.
///
/// Details stay in the logs; clients only ever see these fixed strings.
pub fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::REQUEST_TIMEOUT => "request timeout",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

/// Build the standard error body for `status`.
pub fn error_body(status: StatusCode) -> serde_json::Value {
    json!({
        "success": false,
        "error": status.as_u16(),
        "message": status_message(status),
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, axum::Json(error_body(status))).into_response()
    }
}
