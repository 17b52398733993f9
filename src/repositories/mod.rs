pub mod quiz_repository;
pub mod stats_repository;

pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use stats_repository::{MongoStatsRepository, StatsRepository};
