//! Question field rules and lenient integer parsing for client payloads.
//!
//! Clients send category ids (and sometimes difficulties) either as JSON
//! numbers or as numeric strings taken from object keys and `<select>`
//! values. Both are normalised to integers here so the storage layer only
//! ever sees one representation.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// A fully specified question ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct QuestionDraft {
    #[validate(
        custom(function = "not_blank"),
        length(max = 1000, message = "question must be at most 1000 characters")
    )]
    pub question: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 1000, message = "answer must be at most 1000 characters")
    )]
    pub answer: String,
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i32,
    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: DbId,
}

impl QuestionDraft {
    /// Assemble a draft from optional client fields.
    ///
    /// Text fields are trimmed. Any missing or invalid field makes the whole
    /// draft unprocessable.
    pub fn from_parts(
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<i32>,
        category: Option<DbId>,
    ) -> Result<Self, CoreError> {
        let draft = Self {
            question: required("question", question)?.trim().to_string(),
            answer: required("answer", answer)?.trim().to_string(),
            difficulty: required("difficulty", difficulty)?,
            category: required("category", category)?,
        };
        draft.validate().map_err(validation_failure)?;
        Ok(draft)
    }
}

/// A partial change to an existing question. `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct QuestionPatch {
    #[validate(
        custom(function = "not_blank"),
        length(max = 1000, message = "question must be at most 1000 characters")
    )]
    pub question: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 1000, message = "answer must be at most 1000 characters")
    )]
    pub answer: Option<String>,
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: Option<i32>,
    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: Option<DbId>,
}

impl QuestionPatch {
    /// Trim text fields and check every provided value.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let patch = Self {
            question: self.question.map(|q| q.trim().to_string()),
            answer: self.answer.map(|a| a.trim().to_string()),
            ..self
        };
        if patch.is_empty() {
            return Err(CoreError::Unprocessable(
                "at least one field must be provided".to_string(),
            ));
        }
        patch.validate().map_err(validation_failure)?;
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.answer.is_none()
            && self.difficulty.is_none()
            && self.category.is_none()
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Unprocessable(format!("{field} is required")))
}

/// Text fields are trimmed before validation, so whitespace-only is empty.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validation_failure(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None if e.code == "blank" => format!("{field} must not be empty"),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    CoreError::Unprocessable(messages.join("; "))
}

// ---------------------------------------------------------------------------
// Lenient integers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt {
    Int(i64),
    Text(String),
}

impl RawInt {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            RawInt::Int(v) => Ok(v),
            RawInt::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got '{s}'"))),
        }
    }
}

/// `deserialize_with` adapter for ids sent as numbers or numeric strings.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    RawInt::deserialize(deserializer)?.into_i64()
}

/// Optional variant of [`deserialize_lenient_id`]; pair with `#[serde(default)]`.
pub fn deserialize_optional_lenient_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawInt>::deserialize(deserializer)?
        .map(RawInt::into_i64)
        .transpose()
}

/// Optional small integer (difficulty) sent as a number or numeric string.
pub fn deserialize_optional_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawInt>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => {
            let value = raw.into_i64::<D::Error>()?;
            i32::try_from(value)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("integer {value} out of range")))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
