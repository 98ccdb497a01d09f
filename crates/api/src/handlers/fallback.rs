//! JSON responses for requests no route handles.

use axum::http::{Method, Uri};

use crate::error::AppError;
use trivia_core::error::CoreError;

/// Any path with no matching route.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, %uri, "No route");
    AppError::Core(CoreError::NoneAvailable { entity: "route" })
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, %uri, "Method not allowed");
    AppError::MethodNotAllowed
}
