use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::Caller;

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_QUESTIONS: usize = 50;
pub const OPTIONS_PER_QUESTION: usize = 4;
pub const DEFAULT_CATEGORY: &str = "General Knowledge";

/// Stored quiz document. Field names follow the collection's camelCase
/// convention so documents stay readable from the frontend.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub visibility: Visibility,
    pub questions: Vec<Question>,
    pub author_id: String,
    pub author_name: String,
    pub plays: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct: i32,
}

/// Who may read a quiz. Unrecognized input values deserialize as
/// `Public` rather than failing, on both the create and update paths.
/// The catch-all variant has to stay last for serde to accept it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    #[default]
    #[serde(other)]
    Public,
}

impl Quiz {
    /// Build a new quiz from already-validated input. Assigns the id
    /// and the server-side creation timestamp; `plays` starts at zero.
    pub fn new(
        title: &str,
        description: &str,
        category: Option<String>,
        visibility: Visibility,
        questions: Vec<Question>,
        author: &Caller,
    ) -> Self {
        let description: String = description.trim().chars().take(MAX_DESCRIPTION_LEN).collect();

        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            visibility,
            questions,
            author_id: author.id.clone(),
            author_name: author.display_name(),
            plays: 0,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Caller {
        Caller {
            id: "uid-1".to_string(),
            name: Some("Jamie".to_string()),
            email: None,
        }
    }

    fn question() -> Question {
        Question {
            text: "What is the capital of France?".to_string(),
            options: vec![
                "Paris".to_string(),
                "Lyon".to_string(),
                "Nice".to_string(),
                "Lille".to_string(),
            ],
            correct: 0,
        }
    }

    #[test]
    fn test_new_quiz_defaults() {
        let quiz = Quiz::new(
            "Capitals",
            "",
            None,
            Visibility::Public,
            vec![question()],
            &author(),
        );

        assert!(!quiz.id.is_empty());
        assert_eq!(quiz.category, DEFAULT_CATEGORY);
        assert_eq!(quiz.plays, 0);
        assert_eq!(quiz.author_id, "uid-1");
        assert_eq!(quiz.author_name, "Jamie");
    }

    #[test]
    fn test_new_quiz_truncates_description() {
        let long = "x".repeat(800);
        let quiz = Quiz::new(
            "Capitals",
            &long,
            None,
            Visibility::Public,
            vec![question()],
            &author(),
        );
        assert_eq!(quiz.description.len(), MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn test_visibility_coerces_unknown_values_to_public() {
        let vis: Visibility = serde_json::from_str("\"private\"").unwrap();
        assert_eq!(vis, Visibility::Private);

        let vis: Visibility = serde_json::from_str("\"public\"").unwrap();
        assert_eq!(vis, Visibility::Public);

        for unknown in ["\"unlisted\"", "\"banana\"", "\"PRIVATE\""] {
            let vis: Visibility = serde_json::from_str(unknown).unwrap();
            assert_eq!(vis, Visibility::Public);
        }
    }

    #[test]
    fn test_quiz_serializes_camel_case() {
        let quiz = Quiz::new(
            "Capitals",
            "desc",
            None,
            Visibility::Private,
            vec![question()],
            &author(),
        );

        let json = serde_json::to_value(&quiz).unwrap();
        assert_eq!(json["authorId"], "uid-1");
        assert_eq!(json["visibility"], "private");
        assert!(json.get("createdAt").is_some());
    }
}
