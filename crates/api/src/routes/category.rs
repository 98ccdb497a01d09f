//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET    /categories                      -> list
/// GET    /categories/{id}/questions       -> list_questions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route("/categories/{id}/questions", get(category::list_questions))
}
