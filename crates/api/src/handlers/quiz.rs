//! Handler for the `/quizzes` resource.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use trivia_core::question::deserialize_lenient_id;
use trivia_core::types::DbId;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::quiz::QuizSelector;
use crate::response::QuizResponse;
use crate::state::AppState;

/// The category a quiz is played in. The id may arrive as a number or a
/// numeric string.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_lenient_id")]
    pub id: DbId,
    /// Display label sent back by the front-end; informational only.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategory,
}

/// POST /quizzes
///
/// Returns a random question from the category that is not in
/// `previous_questions`, or `""` once every question has been played.
/// 404 when the category has no questions.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<Json<QuizResponse>> {
    let previous: HashSet<DbId> = input.previous_questions.into_iter().collect();
    let question = QuizSelector::from_state(&state)
        .select(input.quiz_category.id, &previous)
        .await?;

    Ok(Json(QuizResponse {
        question,
        success: true,
    }))
}
