//! Question entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::question::{QuestionDraft, QuestionPatch};
use trivia_core::types::DbId;

/// A row from the `questions` table.
///
/// This is also the wire format: every serialized question carries exactly
/// these five fields.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
}

/// DTO for inserting a new question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
}

impl From<QuestionDraft> for CreateQuestion {
    fn from(draft: QuestionDraft) -> Self {
        Self {
            question: draft.question,
            answer: draft.answer,
            difficulty: draft.difficulty,
            category: draft.category,
        }
    }
}

/// DTO for updating an existing question. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<DbId>,
}

impl From<QuestionPatch> for UpdateQuestion {
    fn from(patch: QuestionPatch) -> Self {
        Self {
            question: patch.question,
            answer: patch.answer,
            difficulty: patch.difficulty,
            category: patch.category,
        }
    }
}
