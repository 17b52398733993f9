pub mod quiz_service;
pub mod stats_service;

pub use quiz_service::QuizService;
pub use stats_service::{StatsField, StatsService};
