use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::errors::AppError;

pub mod auth_handler;
pub mod quiz_handler;
pub mod stats_handler;

pub use auth_handler::{index, verify_token};
pub use quiz_handler::{
    create_quiz, delete_quiz, get_quiz, list_quizzes, my_quizzes, record_play, update_quiz,
};
pub use stats_handler::get_stats;

/// Keeps body-parse failures inside the shared error envelope instead
/// of actix's default payload-error shape.
pub fn json_error_handler(_err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest("Request body must be JSON".to_string()).into()
}
