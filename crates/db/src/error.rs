use trivia_core::types::DbId;

/// Failure reported by a [`TriviaStore`](crate::store::TriviaStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The PostgreSQL backend failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A question referenced a category that does not exist.
    #[error("Category {0} does not exist")]
    UnknownCategory(DbId),
}
