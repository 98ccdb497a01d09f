//! The storage capability used by request handlers.
//!
//! Handlers never reach for a global connection: they receive an
//! `Arc<dyn TriviaStore>` through application state, so tests can swap in
//! [`MemoryStore`](crate::memory::MemoryStore).

use async_trait::async_trait;
use trivia_core::types::DbId;

use crate::error::StoreError;
use crate::models::category::Category;
use crate::models::question::{CreateQuestion, Question, UpdateQuestion};
use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::DbPool;

/// Fetch, filter, insert, update and delete questions; read categories.
///
/// Question listings are ordered by id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, StoreError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, StoreError>;

    /// Questions whose category equals `category_id` exactly.
    async fn questions_in_category(&self, category_id: DbId)
        -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn insert_question(&self, input: &CreateQuestion) -> Result<Question, StoreError>;

    /// Returns `None` when no question has the given id.
    async fn update_question(
        &self,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, StoreError>;

    /// Returns `true` if a question was removed.
    async fn delete_question(&self, id: DbId) -> Result<bool, StoreError>;

    async fn count_questions(&self) -> Result<i64, StoreError>;
}

/// [`TriviaStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        Ok(CategoryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(QuestionRepo::list(&self.pool).await?)
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, StoreError> {
        Ok(QuestionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn questions_in_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(QuestionRepo::list_by_category(&self.pool, category_id).await?)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(QuestionRepo::search(&self.pool, term).await?)
    }

    async fn insert_question(&self, input: &CreateQuestion) -> Result<Question, StoreError> {
        QuestionRepo::create(&self.pool, input)
            .await
            .map_err(|e| classify_write_error(e, input.category))
    }

    async fn update_question(
        &self,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, StoreError> {
        QuestionRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| match input.category {
                Some(category) => classify_write_error(e, category),
                None => StoreError::Database(e),
            })
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(QuestionRepo::delete(&self.pool, id).await?)
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        Ok(QuestionRepo::count(&self.pool).await?)
    }
}

/// Map a PostgreSQL foreign key violation (23503) on `category` to
/// [`StoreError::UnknownCategory`].
fn classify_write_error(err: sqlx::Error, category: DbId) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23503") {
            return StoreError::UnknownCategory(category);
        }
    }
    StoreError::Database(err)
}
