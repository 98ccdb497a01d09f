use axum::routing::post;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Quiz routes.
///
/// ```text
/// POST   /quizzes               -> next_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quiz::next_question))
}
