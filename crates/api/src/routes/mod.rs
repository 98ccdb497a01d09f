pub mod category;
pub mod health;
pub mod question;
pub mod quiz;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /categories                        list categories (GET)
/// /categories/{id}/questions         questions in a category (GET)
///
/// /questions                         paginated list (GET), search (POST)
/// /questions/new                     create (POST)
/// /questions/{id}                    get, update, delete (GET, PATCH, DELETE)
///
/// /quizzes                           next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(category::router())
        .merge(question::router())
        .merge(quiz::router())
}
