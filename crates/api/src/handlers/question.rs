//! Handlers for the `/questions` resource.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use trivia_core::error::CoreError;
use trivia_core::pagination::{paginate, QUESTIONS_PER_PAGE};
use trivia_core::question::{
    deserialize_optional_lenient_i32, deserialize_optional_lenient_id, QuestionDraft,
    QuestionPatch,
};
use trivia_core::types::DbId;
use trivia_db::models::question::{CreateQuestion, UpdateQuestion};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::PageParams;
use crate::response::{
    category_map, CreatedResponse, DeletedResponse, QuestionListResponse, QuestionResponse,
    SearchResponse, NO_CURRENT_CATEGORY,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /questions/new` and `PATCH /questions/{id}`.
///
/// Every field is optional at this stage so a missing one is reported as
/// 422 by the draft/patch validation rather than as a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionFields {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i32")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_lenient_id")]
    pub category: Option<DbId>,
}

/// Body of `POST /questions`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

fn parse_fields(body: serde_json::Value) -> AppResult<QuestionFields> {
    serde_json::from_value(body).map_err(AppError::mutation_failed)
}

/// 422 unless `category` exists, so both store backends reject the same input.
async fn ensure_category(state: &AppState, category: DbId) -> AppResult<()> {
    match state.store.find_category(category).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(AppError::Core(CoreError::Unprocessable(format!(
            "category {category} does not exist"
        )))),
        Err(e) => Err(AppError::mutation_failed(e)),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /questions?page=N
///
/// 404 when the requested page holds no questions.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<QuestionListResponse>> {
    let questions = state.store.list_questions().await?;
    let categories = state.store.list_categories().await?;

    let page_number = params.page();
    let page = paginate(&questions, page_number, QUESTIONS_PER_PAGE);
    if page.is_empty() {
        tracing::debug!(page = page_number, total = questions.len(), "Empty question page");
        return Err(AppError::Core(CoreError::NoneAvailable {
            entity: "questions on this page",
        }));
    }

    Ok(Json(QuestionListResponse {
        questions: page.to_vec(),
        total_questions: questions.len(),
        categories: category_map(&categories),
        current_category: NO_CURRENT_CATEGORY,
        status: true,
        success: true,
    }))
}

/// GET /questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<QuestionResponse>> {
    let question = state
        .store
        .find_question(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    Ok(Json(QuestionResponse {
        question,
        success: true,
    }))
}

/// POST /questions/new
///
/// Requires `question`, `answer`, `difficulty` and `category`; any missing
/// or invalid field is a 422.
pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<serde_json::Value>,
) -> AppResult<Json<CreatedResponse>> {
    let fields = parse_fields(body)?;
    let draft = QuestionDraft::from_parts(
        fields.question,
        fields.answer,
        fields.difficulty,
        fields.category,
    )?;
    ensure_category(&state, draft.category).await?;

    let created = state
        .store
        .insert_question(&CreateQuestion::from(draft))
        .await
        .map_err(AppError::mutation_failed)?;
    tracing::info!(question_id = created.id, category = created.category, "Question created");

    // The insert is committed; a failed count must not turn it into an error.
    let total_questions = match state.store.count_questions().await {
        Ok(total) => Some(total),
        Err(e) => {
            tracing::warn!(question_id = created.id, error = %e, "Count after create failed");
            None
        }
    };

    Ok(Json(CreatedResponse::new(created.id, total_questions)))
}

/// POST /questions?page=N
///
/// Case-insensitive substring search on the question text.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    AppJson(input): AppJson<SearchRequest>,
) -> AppResult<Json<SearchResponse>> {
    let matches = state.store.search_questions(&input.search_term).await?;
    let page = paginate(&matches, params.page(), QUESTIONS_PER_PAGE);

    Ok(Json(SearchResponse {
        questions: page.to_vec(),
        total_questions: matches.len(),
        current_category: NO_CURRENT_CATEGORY,
        success: true,
    }))
}

/// PATCH /questions/{id}
///
/// Applies any subset of the question fields. 404 for an unknown id (checked
/// before the fields), 422 for an empty or invalid change.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(body): AppJson<serde_json::Value>,
) -> AppResult<Json<QuestionResponse>> {
    if state.store.find_question(id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    let fields = parse_fields(body)?;
    let patch = QuestionPatch {
        question: fields.question,
        answer: fields.answer,
        difficulty: fields.difficulty,
        category: fields.category,
    }
    .normalized()?;
    if let Some(category) = patch.category {
        ensure_category(&state, category).await?;
    }

    let question = state
        .store
        .update_question(id, &UpdateQuestion::from(patch))
        .await
        .map_err(AppError::mutation_failed)?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    tracing::info!(question_id = id, "Question updated");

    Ok(Json(QuestionResponse {
        question,
        success: true,
    }))
}

/// DELETE /questions/{id}?page=N
///
/// 422 when the question does not exist or cannot be deleted. The response
/// carries the requested page of the remaining questions.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state
        .store
        .delete_question(id)
        .await
        .map_err(AppError::mutation_failed)?;
    if !deleted {
        return Err(AppError::Core(CoreError::Unprocessable(format!(
            "question {id} does not exist"
        ))));
    }

    tracing::info!(question_id = id, "Question deleted");

    // The delete is committed; a failed listing must not turn it into an error.
    let (total_questions, questions) = match state.store.list_questions().await {
        Ok(remaining) => {
            let page = paginate(&remaining, params.page(), QUESTIONS_PER_PAGE);
            (Some(remaining.len()), page.to_vec())
        }
        Err(e) => {
            tracing::warn!(question_id = id, error = %e, "Listing after delete failed");
            (None, Vec::new())
        }
    };

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        total_questions,
        questions,
    }))
}
