//! In-process [`TriviaStore`] used by tests and the `memory` backend.
//!
//! Behaves like the PostgreSQL store: ids are assigned sequentially,
//! listings are ordered by id, and questions must reference an existing
//! category.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::search::matches_term;
use trivia_core::types::DbId;

use crate::error::StoreError;
use crate::models::category::Category;
use crate::models::question::{CreateQuestion, Question, UpdateQuestion};
use crate::store::TriviaStore;

/// Categories seeded by the initial migration.
pub const DEFAULT_CATEGORIES: &[(DbId, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    questions: BTreeMap<DbId, Question>,
    next_question_id: DbId,
}

/// A [`TriviaStore`] holding its tables in memory behind an async lock.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty store with no categories.
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// A store holding the standard six categories and no questions.
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: (*kind).to_string(),
            })
            .collect();
        Self::with_data(categories, Vec::new())
    }

    /// A store pre-populated with rows whose ids are kept as given.
    ///
    /// New questions get ids above the largest seeded id.
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            next_question_id,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, StoreError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn questions_in_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| matches_term(&q.question, term))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, input: &CreateQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&input.category) {
            return Err(StoreError::UnknownCategory(input.category));
        }

        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let question = Question {
            id,
            question: input.question.clone(),
            answer: input.answer.clone(),
            difficulty: input.difficulty,
            category: input.category,
        };
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn update_question(
        &self,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, StoreError> {
        let mut tables = self.tables.write().await;
        if let Some(category) = input.category {
            if !tables.categories.contains_key(&category) {
                return Err(StoreError::UnknownCategory(category));
            }
        }

        let Some(existing) = tables.questions.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(text) = &input.question {
            existing.question = text.clone();
        }
        if let Some(answer) = &input.answer {
            existing.answer = answer.clone();
        }
        if let Some(difficulty) = input.difficulty {
            existing.difficulty = difficulty;
        }
        if let Some(category) = input.category {
            existing.category = category;
        }
        Ok(Some(existing.clone()))
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        let count = self.tables.read().await.questions.len();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
