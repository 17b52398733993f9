use std::sync::Arc;

use crate::{
    auth::{can_read, can_write, CredentialVerifier},
    errors::{AppError, AppResult},
    models::{
        domain::{GlobalStats, Quiz},
        dto::request::{CreateQuizRequest, UpdateQuizRequest},
    },
    repositories::QuizRepository,
    services::{StatsField, StatsService},
};

/// Public listings are capped regardless of how many quizzes exist.
pub const PUBLIC_LIST_LIMIT: i64 = 50;

/// Orchestrates quiz CRUD: resolves the caller, enforces validation
/// and the access policy before any mutation, then talks to the store
/// and keeps the aggregate counters moving. All collaborators are
/// injected at construction.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    stats: Arc<StatsService>,
    verifier: Arc<CredentialVerifier>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        stats: Arc<StatsService>,
        verifier: Arc<CredentialVerifier>,
    ) -> Self {
        Self {
            quizzes,
            stats,
            verifier,
        }
    }

    /// Newest-first public quizzes, at most `PUBLIC_LIST_LIMIT`. The
    /// caller identity is not consulted even when a token is sent.
    pub async fn list_public(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.list_public(PUBLIC_LIST_LIMIT).await
    }

    pub async fn get_quiz(&self, token: Option<&str>, id: &str) -> AppResult<Quiz> {
        let caller = self.verifier.optional(token).await;

        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if !can_read(caller.as_ref(), &quiz) {
            return Err(AppError::Forbidden("This quiz is private".to_string()));
        }

        Ok(quiz)
    }

    /// Validates, writes the record, then bumps the quizzes counter.
    /// The two store calls are independent; a counter failure after the
    /// insert is logged with the new id and still surfaced.
    pub async fn create_quiz(
        &self,
        token: Option<&str>,
        request: CreateQuizRequest,
    ) -> AppResult<String> {
        let caller = self.verifier.require(token).await?;
        let title = request.validate()?.to_string();

        let quiz = Quiz::new(
            &title,
            &request.description,
            request.category,
            request.visibility,
            request.questions,
            &caller,
        );

        let quiz = self.quizzes.create(quiz).await?;
        log::info!("Quiz {} created by {}", quiz.id, caller.id);

        if let Err(e) = self.stats.increment(StatsField::Quizzes, 1).await {
            log::error!(
                "Quiz {} was created but the stats increment failed: {}",
                quiz.id,
                e
            );
            return Err(e);
        }

        Ok(quiz.id)
    }

    /// Partial merge of the updatable fields. Ownership is enforced
    /// against the stored record; `id`, `authorId`, `createdAt` and
    /// `plays` are not updatable. Questions submitted here are applied
    /// as-is, without the create-path structural validation.
    pub async fn update_quiz(
        &self,
        token: Option<&str>,
        id: &str,
        request: UpdateQuizRequest,
    ) -> AppResult<()> {
        let caller = self.verifier.require(token).await?;

        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if !can_write(&caller, &quiz) {
            return Err(AppError::Forbidden(
                "You don't have permission to edit this quiz".to_string(),
            ));
        }

        request.validate()?;
        let updates = request.to_update_document()?;
        if updates.is_empty() {
            return Ok(());
        }

        let matched = self.quizzes.update(id, updates).await?;
        if !matched {
            // Lost a race with a concurrent delete.
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        Ok(())
    }

    pub async fn delete_quiz(&self, token: Option<&str>, id: &str) -> AppResult<()> {
        let caller = self.verifier.require(token).await?;

        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if !can_write(&caller, &quiz) {
            return Err(AppError::Forbidden(
                "You don't have permission to delete this quiz".to_string(),
            ));
        }

        let deleted = self.quizzes.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }
        log::info!("Quiz {} deleted by {}", id, caller.id);

        if let Err(e) = self.stats.increment(StatsField::Quizzes, -1).await {
            log::error!(
                "Quiz {} was deleted but the stats decrement failed: {}",
                id,
                e
            );
            return Err(e);
        }

        Ok(())
    }

    /// No auth and no ownership check: anyone can record a play. Two
    /// independent atomic increments, one on the record and one on the
    /// global counter.
    pub async fn record_play(&self, id: &str) -> AppResult<()> {
        let matched = self.quizzes.increment_plays(id, 1).await?;
        if !matched {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        if let Err(e) = self.stats.increment(StatsField::Plays, 1).await {
            log::error!(
                "Play recorded for quiz {} but the stats increment failed: {}",
                id,
                e
            );
            return Err(e);
        }

        Ok(())
    }

    /// Every quiz owned by the caller, newest first, no cap.
    pub async fn my_quizzes(&self, token: Option<&str>) -> AppResult<Vec<Quiz>> {
        let caller = self.verifier.require(token).await?;
        self.quizzes.list_by_author(&caller.id).await
    }

    pub async fn get_stats(&self) -> AppResult<GlobalStats> {
        self.stats.get_stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::verifier::{MockTokenVerifier, RejectReason},
        models::domain::Caller,
        repositories::{
            quiz_repository::MockQuizRepository, stats_repository::MockStatsRepository,
        },
        test_utils::fixtures::{test_caller, valid_create_request},
    };
    use mockall::predicate::eq;

    fn service_with(
        quizzes: MockQuizRepository,
        stats: MockStatsRepository,
        verifier: MockTokenVerifier,
    ) -> QuizService {
        QuizService::new(
            Arc::new(quizzes),
            Arc::new(StatsService::new(Arc::new(stats))),
            Arc::new(CredentialVerifier::new(Arc::new(verifier))),
        )
    }

    fn accepting_verifier(caller: Caller) -> MockTokenVerifier {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .returning(move |_| Ok(caller.clone()));
        verifier
    }

    #[tokio::test]
    async fn test_create_quiz_writes_record_and_bumps_counter() {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_create()
            .times(1)
            .returning(|quiz| {
                assert_eq!(quiz.plays, 0);
                assert_eq!(quiz.author_id, "uid-1");
                Ok(quiz)
            });

        let mut stats = MockStatsRepository::new();
        stats
            .expect_increment_field()
            .with(eq("quizzes"), eq(1))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service_with(quizzes, stats, accepting_verifier(test_caller()));
        let id = service
            .create_quiz(Some("token"), valid_create_request())
            .await
            .unwrap();
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_create_quiz_validation_failure_blocks_all_mutation() {
        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_create().times(0);
        let mut stats = MockStatsRepository::new();
        stats.expect_increment_field().times(0);

        let mut request = valid_create_request();
        request.questions.clear();

        let service = service_with(quizzes, stats, accepting_verifier(test_caller()));
        let err = service.create_quiz(Some("token"), request).await.unwrap_err();
        assert_eq!(err.to_string(), "At least one question is required");
    }

    #[tokio::test]
    async fn test_create_quiz_requires_auth() {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .returning(|_| Err(RejectReason::Invalid));

        let service = service_with(
            MockQuizRepository::new(),
            MockStatsRepository::new(),
            verifier,
        );

        let err = service
            .create_quiz(Some("bad-token"), valid_create_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        let err = service
            .create_quiz(None, valid_create_request())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing or invalid Authorization header");
    }

    #[tokio::test]
    async fn test_record_play_maps_missing_record_to_not_found() {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_increment_plays()
            .with(eq("nope"), eq(1))
            .returning(|_, _| Ok(false));
        let mut stats = MockStatsRepository::new();
        stats.expect_increment_field().times(0);

        let service = service_with(quizzes, stats, MockTokenVerifier::new());
        let err = service.record_play("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_record_play_surfaces_partial_stats_failure() {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_increment_plays()
            .returning(|_, _| Ok(true));
        let mut stats = MockStatsRepository::new();
        stats
            .expect_increment_field()
            .returning(|_, _| Err(AppError::DatabaseError("write failed".to_string())));

        let service = service_with(quizzes, stats, MockTokenVerifier::new());
        let err = service.record_play("q-1").await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_update_with_no_updatable_fields_is_an_ack() {
        let caller = test_caller();
        let quiz = crate::test_utils::fixtures::test_quiz(
            "q-1",
            &caller,
            crate::models::domain::Visibility::Public,
        );

        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .with(eq("q-1"))
            .returning(move |_| Ok(Some(quiz.clone())));
        quizzes.expect_update().times(0);

        let service = service_with(
            quizzes,
            MockStatsRepository::new(),
            accepting_verifier(caller),
        );

        service
            .update_quiz(Some("token"), "q-1", UpdateQuizRequest::default())
            .await
            .unwrap();
    }
}
