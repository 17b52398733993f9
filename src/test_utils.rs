#[cfg(test)]
pub mod fixtures {
    use crate::models::{
        domain::{Caller, Question, Quiz, Visibility},
        dto::request::CreateQuizRequest,
    };

    /// The caller whose id matches fixture quiz ownership.
    pub fn test_caller() -> Caller {
        Caller {
            id: "uid-1".to_string(),
            name: Some("Jamie".to_string()),
            email: Some("jamie@example.com".to_string()),
        }
    }

    pub fn test_question() -> Question {
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

    /// A request that passes every validation rule.
    pub fn valid_create_request() -> CreateQuizRequest {
        CreateQuizRequest {
            title: "Capitals".to_string(),
            description: "European capitals".to_string(),
            category: None,
            visibility: Visibility::Public,
            questions: vec![test_question()],
        }
    }

    /// A stored quiz with a fixed id, owned by `author`.
    pub fn test_quiz(id: &str, author: &Caller, visibility: Visibility) -> Quiz {
        let mut quiz = Quiz::new(
            "Capitals",
            "European capitals",
            None,
            visibility,
            vec![test_question()],
            author,
        );
        quiz.id = id.to_string();
        quiz
    }
}

#[cfg(test)]
pub mod tokens {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use secrecy::ExposeSecret;

    use crate::{auth::Claims, config::Config};

    fn sign(claims: &Claims) -> String {
        let config = Config::test_config();
        let key = EncodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes());
        encode(&Header::default(), claims, &key).expect("test token should encode")
    }

    /// Token the test verifier accepts.
    pub fn issue(sub: &str, name: Option<&str>, email: Option<&str>) -> String {
        let now = Utc::now();
        sign(&Claims {
            sub: sub.to_string(),
            name: name.map(|v| v.to_string()),
            email: email.map(|v| v.to_string()),
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(1)).timestamp() as usize,
        })
    }

    /// Correctly signed but already expired.
    pub fn issue_expired(sub: &str) -> String {
        let now = Utc::now();
        sign(&Claims {
            sub: sub.to_string(),
            name: None,
            email: None,
            iat: (now - Duration::hours(2)).timestamp() as usize,
            exp: (now - Duration::hours(1)).timestamp() as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Visibility;

    #[test]
    fn test_fixture_request_is_valid() {
        assert!(valid_create_request().validate().is_ok());
    }

    #[test]
    fn test_fixture_quiz_ownership() {
        let quiz = test_quiz("q-1", &test_caller(), Visibility::Private);
        assert_eq!(quiz.id, "q-1");
        assert_eq!(quiz.author_id, test_caller().id);
        assert_eq!(quiz.visibility, Visibility::Private);
    }
}
