//! Route definitions for the `/questions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Question routes.
///
/// ```text
/// GET    /questions             -> list
/// POST   /questions             -> search
/// POST   /questions/new         -> create
/// GET    /questions/{id}        -> get_by_id
/// PATCH  /questions/{id}        -> update
/// DELETE /questions/{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(question::list).post(question::search))
        .route("/questions/new", post(question::create))
        .route(
            "/questions/{id}",
            get(question::get_by_id)
                .patch(question::update)
                .delete(question::delete),
        )
}
