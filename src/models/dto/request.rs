use mongodb::bson::{doc, to_bson, Document};
use serde::Deserialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::quiz::{MAX_QUESTIONS, MAX_TITLE_LEN, OPTIONS_PER_QUESTION},
    models::domain::{Question, Visibility},
};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateQuizRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl CreateQuizRequest {
    /// Structural validation for quiz creation. Pure, no I/O; rules are
    /// checked in order and the first failure wins. Returns the trimmed
    /// title on success.
    pub fn validate(&self) -> AppResult<&str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest("Quiz title is required".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::BadRequest(
                "Title must be under 120 characters".to_string(),
            ));
        }
        if self.questions.is_empty() {
            return Err(AppError::BadRequest(
                "At least one question is required".to_string(),
            ));
        }
        if self.questions.len() > MAX_QUESTIONS {
            return Err(AppError::BadRequest(
                "Maximum 50 questions allowed".to_string(),
            ));
        }

        // Question indexes are 1-based in error messages.
        for (i, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Question {} is missing text",
                    i + 1
                )));
            }
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(AppError::BadRequest(format!(
                    "Question {} must have exactly 4 options",
                    i + 1
                )));
            }
            if !(0..OPTIONS_PER_QUESTION as i32).contains(&question.correct) {
                return Err(AppError::BadRequest(format!(
                    "Question {} has invalid correct answer index",
                    i + 1
                )));
            }
        }

        Ok(title)
    }
}

/// Partial update payload. Only these five fields are updatable; any
/// other keys in the request body are dropped by deserialization.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateQuizRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub visibility: Option<Visibility>,
    pub questions: Option<Vec<Question>>,
}

impl UpdateQuizRequest {
    /// The update path only re-checks title emptiness; questions are
    /// applied as submitted without structural re-validation.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest("Title cannot be empty".to_string()));
            }
        }
        Ok(())
    }

    /// `$set` payload containing exactly the fields present in the
    /// request. Empty when the request carries none of them.
    pub fn to_update_document(&self) -> AppResult<Document> {
        let mut updates = doc! {};
        if let Some(title) = &self.title {
            updates.insert("title", title.clone());
        }
        if let Some(description) = &self.description {
            updates.insert("description", description.clone());
        }
        if let Some(category) = &self.category {
            updates.insert("category", category.clone());
        }
        if let Some(visibility) = &self.visibility {
            updates.insert("visibility", to_bson(visibility)?);
        }
        if let Some(questions) = &self.questions {
            updates.insert("questions", to_bson(questions)?);
        }
        Ok(updates)
    }
}
