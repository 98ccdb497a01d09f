//! Handlers for the `/categories` resource.

use axum::extract::{Query, State};
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::{paginate, QUESTIONS_PER_PAGE};
use trivia_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::query::PageParams;
use crate::response::{category_map, CategoriesResponse, CategoryQuestionsResponse};
use crate::state::AppState;

/// GET /categories
///
/// 404 when no categories exist.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = state.store.list_categories().await?;
    if categories.is_empty() {
        return Err(AppError::Core(CoreError::NoneAvailable {
            entity: "categories",
        }));
    }

    Ok(Json(CategoriesResponse {
        categories: category_map(&categories),
        success: true,
    }))
}

/// GET /categories/{id}/questions?page=N
///
/// 404 when the category does not exist. An existing category with no
/// questions (or a page past the end) returns an empty list.
pub async fn list_questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<CategoryQuestionsResponse>> {
    let category = state
        .store
        .find_category(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let questions = state.store.questions_in_category(category.id).await?;
    let page = paginate(&questions, params.page(), QUESTIONS_PER_PAGE);

    Ok(Json(CategoryQuestionsResponse {
        questions: page.to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
        success: true,
    }))
}
