use async_trait::async_trait;
use mongodb::{bson::doc, options::UpdateOptions, Collection};

use crate::{db::Database, errors::AppResult, models::domain::GlobalStats};

const GLOBAL_STATS_ID: &str = "global";

/// Persistence capability for the single aggregate counters document.
/// The only write primitive is an atomic field increment with
/// create-if-absent semantics; the record is never replaced wholesale.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn increment_field(&self, field: &str, delta: i64) -> AppResult<()>;
    async fn find_global(&self) -> AppResult<Option<GlobalStats>>;
}

pub struct MongoStatsRepository {
    collection: Collection<GlobalStats>,
}

impl MongoStatsRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("stats");
        Self { collection }
    }
}

#[async_trait]
impl StatsRepository for MongoStatsRepository {
    async fn increment_field(&self, field: &str, delta: i64) -> AppResult<()> {
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(
                doc! { "_id": GLOBAL_STATS_ID },
                doc! { "$inc": { field: delta } },
            )
            .with_options(options)
            .await?;

        Ok(())
    }

    async fn find_global(&self) -> AppResult<Option<GlobalStats>> {
        let stats = self
            .collection
            .find_one(doc! { "_id": GLOBAL_STATS_ID })
            .await?;
        Ok(stats)
    }
}
