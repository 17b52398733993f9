use std::sync::Arc;

use crate::{
    auth::{CredentialVerifier, JwtVerifier},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, MongoStatsRepository},
    services::{QuizService, StatsService},
};

/// Everything a request handler needs, wired once at startup. All
/// collaborators are explicit dependencies held behind Arcs; there are
/// no process-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub verifier: Arc<CredentialVerifier>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let stats_repository = Arc::new(MongoStatsRepository::new(&db));
        let stats_service = Arc::new(StatsService::new(stats_repository));

        let verifier = Arc::new(CredentialVerifier::new(Arc::new(JwtVerifier::new(
            &config.jwt_secret,
        ))));

        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            stats_service,
            verifier.clone(),
        ));

        Ok(Self {
            quiz_service,
            verifier,
            config: Arc::new(config),
        })
    }
}
