//! Quiz question selection.

use std::collections::HashSet;
use std::sync::Arc;

use trivia_core::error::CoreError;
use trivia_core::quiz::{draw_unseen, RandomSource};
use trivia_core::types::DbId;
use trivia_db::models::question::Question;
use trivia_db::TriviaStore;

use crate::error::AppResult;
use crate::state::AppState;

/// Picks the next quiz question for a category.
///
/// Both the store and the random source are injected, so a selector built
/// over a [`MemoryStore`](trivia_db::MemoryStore) and a
/// [`SeededRandom`](trivia_core::quiz::SeededRandom) is fully reproducible.
pub struct QuizSelector {
    store: Arc<dyn TriviaStore>,
    random: Arc<dyn RandomSource>,
}

impl QuizSelector {
    pub fn new(store: Arc<dyn TriviaStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.store), Arc::clone(&state.random))
    }

    /// Draw one question from `category_id` whose id is not in `previous`.
    ///
    /// A category with no questions at all is `NotFound`, whether or not the
    /// category exists. A category whose questions have all been seen yields
    /// `Ok(None)`.
    pub async fn select(
        &self,
        category_id: DbId,
        previous: &HashSet<DbId>,
    ) -> AppResult<Option<Question>> {
        let candidates = self.store.questions_in_category(category_id).await?;
        if candidates.is_empty() {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: category_id,
            }
            .into());
        }

        let total = candidates.len();
        let picked = draw_unseen(candidates, previous, |q| q.id, self.random.as_ref());

        tracing::debug!(
            category_id,
            total,
            seen = previous.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz draw"
        );
        Ok(picked)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
