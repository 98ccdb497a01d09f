//! Response bodies for the trivia endpoints.
//!
//! Field names follow what the quiz front-end reads, including the
//! `"Null"` placeholder for listings that are not scoped to a category.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use trivia_core::types::DbId;
use trivia_db::models::category::Category;
use trivia_db::models::question::Question;

/// `current_category` value for listings not scoped to one category.
pub const NO_CURRENT_CATEGORY: &str = "Null";

/// Categories keyed by id, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Index categories by id.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// GET /categories
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
    pub success: bool,
}

/// GET /questions
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: &'static str,
    pub status: bool,
    pub success: bool,
}

/// POST /questions (search)
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: &'static str,
    pub success: bool,
}

/// GET /categories/{id}/questions
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Label of the requested category.
    pub current_category: String,
    pub success: bool,
}

/// GET / PATCH /questions/{id}
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: Question,
    pub success: bool,
}

/// POST /questions/new
///
/// The new id is sent as both `created` and `question_id`; clients read
/// either one.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: DbId,
    pub question_id: DbId,
    /// Omitted when the count could not be read after the insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<i64>,
}

impl CreatedResponse {
    pub fn new(id: DbId, total_questions: Option<i64>) -> Self {
        Self {
            success: true,
            created: id,
            question_id: id,
            total_questions,
        }
    }
}

/// DELETE /questions/{id}
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: DbId,
    /// Omitted when the remaining questions could not be read after the delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<usize>,
    /// The requested page of the remaining questions.
    pub questions: Vec<Question>,
}

/// POST /quizzes
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// The drawn question, or `""` when the category is exhausted.
    #[serde(serialize_with = "question_or_empty")]
    pub question: Option<Question>,
    pub success: bool,
}

fn question_or_empty<S>(question: &Option<Question>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(q) => q.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn category_map_uses_string_keys() {
        let categories = vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ];
        let body = serde_json::to_value(CategoriesResponse {
            categories: category_map(&categories),
            success: true,
        })
        .unwrap();
        assert_eq!(body, json!({"categories": {"1": "Science", "2": "Art"}, "success": true}));
    }

    #[test]
    fn created_carries_id_under_both_names() {
        let body = serde_json::to_value(CreatedResponse::new(24, Some(20))).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "created": 24, "question_id": 24, "total_questions": 20})
        );

        let body = serde_json::to_value(CreatedResponse::new(24, None)).unwrap();
        assert!(body.get("total_questions").is_none());
    }

    #[test]
    fn exhausted_quiz_serializes_empty_string() {
        let body = serde_json::to_value(QuizResponse {
            question: None,
            success: true,
        })
        .unwrap();
        assert_eq!(body, json!({"question": "", "success": true}));
    }

    #[test]
    fn quiz_question_carries_all_fields() {
        let body = serde_json::to_value(QuizResponse {
            question: Some(Question {
                id: 12,
                question: "Q".into(),
                answer: "A".into(),
                difficulty: 2,
                category: 2,
            }),
            success: true,
        })
        .unwrap();
        assert_eq!(
            body["question"],
            json!({"id": 12, "question": "Q", "answer": "A", "difficulty": 2, "category": 2})
        );
    }
}
