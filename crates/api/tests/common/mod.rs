#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use trivia_api::config::{LogFormat, ServerConfig, StorageBackend};
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;
use trivia_core::quiz::SeededRandom;
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::Question;
use trivia_db::memory::DEFAULT_CATEGORIES;
use trivia_db::{MemoryStore, TriviaStore};

/// Seed used for every test app so quiz draws are reproducible.
pub const TEST_SEED: u64 = 7;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the in-memory store, any CORS origin and a 30-second request
/// timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        quiz_seed: Some(TEST_SEED),
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over `store`.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: MemoryStore) -> Router {
    build_test_app_with_store(Arc::new(store))
}

/// Like [`build_test_app`], over any store implementation.
pub fn build_test_app_with_store(store: Arc<dyn TriviaStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        random: Arc::new(SeededRandom::new(TEST_SEED)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, kind)| Category {
            id: *id,
            kind: kind.to_string(),
        })
        .collect()
}

pub fn question(id: DbId, text: &str, category: DbId) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("Answer {id}"),
        difficulty: 2,
        category,
    }
}

/// The default categories plus `count` questions numbered from 1, spread
/// round-robin over categories 1 to 4.
pub fn store_with_questions(count: i64) -> MemoryStore {
    let questions = (1..=count)
        .map(|id| question(id, &format!("Question number {id}"), (id - 1) % 4 + 1))
        .collect();
    MemoryStore::with_data(default_categories(), questions)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PATCH, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the standard error body for `status`.
pub async fn assert_error(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status.as_u16());
    assert_eq!(json["message"], message);
}
