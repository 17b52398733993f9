use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

/// Persistence capability for quiz documents. `update` applies a
/// partial `$set` merge; `increment_plays` is the store's atomic
/// counter primitive. Operations touching a single id report whether a
/// document matched so callers can map misses to NotFound.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_public(&self, limit: i64) -> AppResult<Vec<Quiz>>;
    async fn list_by_author(&self, author_id: &str) -> AppResult<Vec<Quiz>>;
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn update(&self, id: &str, updates: Document) -> AppResult<bool>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
    async fn increment_plays(&self, id: &str, delta: i64) -> AppResult<bool>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        // Serves the public listing: filter on visibility, newest first.
        let listing_index = IndexModel::builder()
            .keys(doc! { "visibility": 1, "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("visibility_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(listing_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_public(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        use futures::TryStreamExt;

        let find_options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! { "visibility": "public" })
            .with_options(find_options)
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;

        Ok(items)
    }

    async fn list_by_author(&self, author_id: &str) -> AppResult<Vec<Quiz>> {
        use futures::TryStreamExt;

        let find_options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "authorId": author_id })
            .with_options(find_options)
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;

        Ok(items)
    }

    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn update(&self, id: &str, updates: Document) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$set": updates })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn increment_plays(&self, id: &str, delta: i64) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$inc": { "plays": delta } })
            .await?;
        Ok(result.matched_count > 0)
    }
}
