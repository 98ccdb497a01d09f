use std::sync::Arc;

use trivia_core::quiz::RandomSource;
use trivia_db::TriviaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Question and category storage.
    pub store: Arc<dyn TriviaStore>,
    /// Random source for quiz draws.
    pub random: Arc<dyn RandomSource>,
}
