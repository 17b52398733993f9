use std::sync::Arc;

use crate::{errors::AppResult, models::domain::GlobalStats, repositories::StatsRepository};

/// Counters tracked in the global stats document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsField {
    Quizzes,
    Plays,
    Users,
}

impl StatsField {
    pub fn field_name(&self) -> &'static str {
        match self {
            StatsField::Quizzes => "quizzes",
            StatsField::Plays => "plays",
            StatsField::Users => "users",
        }
    }
}

/// Aggregate counter maintenance. Holds no state of its own; the
/// store's atomic increment is the only concurrency primitive, so
/// concurrent deltas against the same field converge regardless of
/// interleaving.
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Add `delta` (positive or negative) to one counter. The first
    /// increment against a missing record creates it.
    pub async fn increment(&self, field: StatsField, delta: i64) -> AppResult<()> {
        self.repository.increment_field(field.field_name(), delta).await
    }

    /// Current counters; a missing record reads as all zeroes.
    pub async fn get_stats(&self) -> AppResult<GlobalStats> {
        let stats = self.repository.find_global().await?.unwrap_or_default();
        Ok(stats)
    }
}
