//! HTTP-level integration tests for the `/questions` endpoints.
//!
//! Each test seeds a `MemoryStore`, sends requests straight to the router
//! with `tower::ServiceExt`, and checks status codes and JSON bodies.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{
    assert_error, body_json, build_test_app, build_test_app_with_store, default_categories,
    delete, get, patch_json, post_json, question, send, store_with_questions,
};
use serde_json::json;
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::{CreateQuestion, Question, UpdateQuestion};
use trivia_db::{MemoryStore, StoreError, TriviaStore};

/// Writes succeed, but counting and listing every question fail.
struct UnreadableTotals(MemoryStore);

fn read_failure() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl TriviaStore for UnreadableTotals {
    async fn health_check(&self) -> Result<(), StoreError> {
        self.0.health_check().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.0.list_categories().await
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        self.0.find_category(id).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Err(read_failure())
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, StoreError> {
        self.0.find_question(id).await
    }

    async fn questions_in_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, StoreError> {
        self.0.questions_in_category(category_id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        self.0.search_questions(term).await
    }

    async fn insert_question(&self, input: &CreateQuestion) -> Result<Question, StoreError> {
        self.0.insert_question(input).await
    }

    async fn update_question(
        &self,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, StoreError> {
        self.0.update_question(id, input).await
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, StoreError> {
        self.0.delete_question(id).await
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        Err(read_failure())
    }
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: GET /questions paginates ten per page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_first_page() {
    let app = build_test_app(store_with_questions(23));
    let response = get(app, "/questions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["status"], true);
    assert_eq!(json["total_questions"], 23);
    assert_eq!(json["current_category"], "Null");
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(ids(&json), (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_list_last_partial_page() {
    let app = build_test_app(store_with_questions(23));
    let response = get(app, "/questions?page=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 23);
    assert_eq!(ids(&json), vec![21, 22, 23]);
}

#[tokio::test]
async fn test_list_non_numeric_page_falls_back_to_first() {
    let app = build_test_app(store_with_questions(15));
    let response = get(app, "/questions?page=abc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json).first(), Some(&1));
}

#[tokio::test]
async fn test_list_page_past_end_is_404() {
    let app = build_test_app(store_with_questions(23));
    let response = get(app, "/questions?page=1000").await;

    assert_error(response, StatusCode::NOT_FOUND, "resource not found").await;
}

#[tokio::test]
async fn test_list_page_beyond_u32_is_404() {
    let app = build_test_app(store_with_questions(23));
    let response = get(app, "/questions?page=4294967296").await;

    assert_error(response, StatusCode::NOT_FOUND, "resource not found").await;
}

#[tokio::test]
async fn test_list_empty_store_is_404() {
    let app = build_test_app(MemoryStore::with_default_categories());
    let response = get(app, "/questions").await;

    assert_error(response, StatusCode::NOT_FOUND, "resource not found").await;
}

// ---------------------------------------------------------------------------
// Test: POST /questions searches question text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let store = MemoryStore::with_data(
        default_categories(),
        vec![
            question(1, "What is the title of the 1990 fantasy film?", 5),
            question(2, "Which TITLE did Cassius Clay hold?", 6),
            question(3, "What is the heaviest organ?", 1),
        ],
    );
    let app = build_test_app(store);
    let response = post_json(app, "/questions", json!({"searchTerm": "title"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_questions"], 2);
    assert_eq!(json["current_category"], "Null");
    assert_eq!(ids(&json), vec![1, 2]);
}

#[tokio::test]
async fn test_search_without_match_returns_empty_list() {
    let app = build_test_app(store_with_questions(5));
    let response = post_json(app, "/questions", json!({"searchTerm": "zzzzNoMatch"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 0);
    assert!(json["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_percent_is_literal() {
    let store = MemoryStore::with_data(
        default_categories(),
        vec![
            question(1, "What is 50% of 10?", 1),
            question(2, "What is half of 10?", 1),
        ],
    );
    let app = build_test_app(store);
    let response = post_json(app, "/questions", json!({"searchTerm": "%"})).await;

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![1]);
}

#[tokio::test]
async fn test_search_empty_term_matches_everything() {
    let app = build_test_app(store_with_questions(12));
    let response = post_json(app, "/questions", json!({"searchTerm": ""})).await;

    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 12);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_search_page_beyond_u32_is_empty() {
    let app = build_test_app(store_with_questions(12));
    let response = post_json(app, "/questions?page=99999999999", json!({"searchTerm": ""})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 12);
    assert!(json["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_without_term_is_400() {
    let app = build_test_app(store_with_questions(5));
    let response = post_json(app, "/questions", json!({"term": "title"})).await;

    assert_error(response, StatusCode::BAD_REQUEST, "bad request").await;
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = build_test_app(store_with_questions(5));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header("content-type", "application/json")
        .body(Body::from("{\"searchTerm\": "))
        .unwrap();
    let response = send(app, request).await;

    assert_error(response, StatusCode::BAD_REQUEST, "bad request").await;
}

// ---------------------------------------------------------------------------
// Test: POST /questions/new
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_then_fetch() {
    let app = build_test_app(store_with_questions(3));
    let response = post_json(
        app.clone(),
        "/questions/new",
        json!({
            "question": "  Who painted the Mona Lisa?  ",
            "answer": "Leonardo da Vinci",
            "difficulty": 2,
            "category": "2",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["created"], 4);
    assert_eq!(json["question_id"], 4);
    assert_eq!(json["total_questions"], 4);

    let response = get(app, "/questions/4").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["question"],
        json!({
            "id": 4,
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "difficulty": 2,
            "category": 2,
        })
    );
}

#[tokio::test]
async fn test_create_succeeds_when_count_fails() {
    let store = Arc::new(UnreadableTotals(store_with_questions(3)));
    let app = build_test_app_with_store(store.clone());
    let response = post_json(
        app,
        "/questions/new",
        json!({"question": "Q", "answer": "A", "difficulty": 1, "category": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["created"], 4);
    assert!(json.get("total_questions").is_none());
    assert!(store.find_question(4).await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_missing_field_is_422() {
    let app = build_test_app(store_with_questions(3));
    let response = post_json(
        app.clone(),
        "/questions/new",
        json!({"question": "No answer?", "difficulty": 1, "category": 1}),
    )
    .await;

    assert_error(response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;

    // Nothing was stored.
    let json = body_json(get(app, "/questions").await).await;
    assert_eq!(json["total_questions"], 3);
}

#[tokio::test]
async fn test_create_invalid_values_are_422() {
    let bodies = [
        json!({"question": "Q", "answer": "A", "difficulty": 9, "category": 1}),
        json!({"question": "   ", "answer": "A", "difficulty": 1, "category": 1}),
        json!({"question": "Q", "answer": "A", "difficulty": "hard", "category": 1}),
        json!({"question": "Q", "answer": "A", "difficulty": 1, "category": 99}),
        json!(["not", "an", "object"]),
    ];

    for body in bodies {
        let app = build_test_app(store_with_questions(3));
        let response = post_json(app, "/questions/new", body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body {body} should be rejected"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: GET /questions/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_unknown_question_is_404() {
    let app = build_test_app(store_with_questions(3));
    let response = get(app, "/questions/1000").await;

    assert_error(response, StatusCode::NOT_FOUND, "resource not found").await;
}

// ---------------------------------------------------------------------------
// Test: PATCH /questions/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_patch_updates_given_fields_only() {
    let app = build_test_app(store_with_questions(3));
    let response = patch_json(
        app.clone(),
        "/questions/2",
        json!({"difficulty": 5, "answer": " Updated "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["question"]["difficulty"], 5);
    assert_eq!(json["question"]["answer"], "Updated");
    assert_eq!(json["question"]["question"], "Question number 2");

    let json = body_json(get(app, "/questions/2").await).await;
    assert_eq!(json["question"]["difficulty"], 5);
}

#[tokio::test]
async fn test_patch_unknown_question_is_404() {
    let app = build_test_app(store_with_questions(3));
    let response = patch_json(app, "/questions/1000", json!({"difficulty": 3})).await;

    assert_error(response, StatusCode::NOT_FOUND, "resource not found").await;
}

#[tokio::test]
async fn test_patch_unknown_question_with_bad_category_is_404() {
    let app = build_test_app(store_with_questions(3));
    let response = patch_json(app, "/questions/1000", json!({"category": 42})).await;

    assert_error(response, StatusCode::NOT_FOUND, "resource not found").await;
}

#[tokio::test]
async fn test_patch_empty_body_is_422() {
    let app = build_test_app(store_with_questions(3));
    let response = patch_json(app, "/questions/1", json!({})).await;

    assert_error(response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;
}

#[tokio::test]
async fn test_patch_unknown_category_is_422() {
    let app = build_test_app(store_with_questions(3));
    let response = patch_json(app, "/questions/1", json!({"category": 42})).await;

    assert_error(response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;
}

// ---------------------------------------------------------------------------
// Test: DELETE /questions/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_question() {
    let app = build_test_app(store_with_questions(12));
    let response = delete(app.clone(), "/questions/5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], 5);
    assert_eq!(json["total_questions"], 11);
    let remaining = ids(&json);
    assert_eq!(remaining.len(), 10);
    assert!(!remaining.contains(&5));

    let response = get(app, "/questions/5").await;
    assert_error(response, StatusCode::NOT_FOUND, "resource not found").await;
}

#[tokio::test]
async fn test_delete_succeeds_when_listing_fails() {
    let store = Arc::new(UnreadableTotals(store_with_questions(3)));
    let app = build_test_app_with_store(store.clone());
    let response = delete(app, "/questions/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], 2);
    assert!(json.get("total_questions").is_none());
    assert!(store.find_question(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_unknown_question_is_422() {
    let app = build_test_app(store_with_questions(3));
    let response = delete(app.clone(), "/questions/1000").await;

    assert_error(response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;

    let json = body_json(get(app, "/questions").await).await;
    assert_eq!(json["total_questions"], 3);
}

#[tokio::test]
async fn test_delete_twice_is_422() {
    let app = build_test_app(store_with_questions(3));
    let first = delete(app.clone(), "/questions/1").await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = delete(app, "/questions/1").await;
    assert_error(second, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;
}

// ---------------------------------------------------------------------------
// Test: unsupported methods return the JSON 405 body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_to_question_id_is_405() {
    let app = build_test_app(store_with_questions(3));
    let response = post_json(app, "/questions/45", json!({})).await;

    assert_error(response, StatusCode::METHOD_NOT_ALLOWED, "method not allowed").await;
}

#[tokio::test]
async fn test_delete_on_collection_is_405() {
    let app = build_test_app(store_with_questions(3));
    let response = delete(app, "/questions").await;

    assert_error(response, StatusCode::METHOD_NOT_ALLOWED, "method not allowed").await;
}
