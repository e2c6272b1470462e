pub mod feedback;
pub mod memory;
pub mod schema;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::{Feedback, NewFeedback, Rating};

pub use memory::MemoryFeedbackStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt feedback row {id}: {reason}")]
    CorruptRow { id: i64, reason: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only keeping of feedback records.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Assigns `id` and `created_at` and returns the stored record.
    async fn create(&self, candidate: NewFeedback) -> Result<Feedback, StoreError>;

    /// Newest first, at most [`crate::models::LIST_LIMIT`] records,
    /// restricted to `filter` when one is given.
    async fn list(&self, filter: Option<Rating>) -> Result<Vec<Feedback>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgFeedbackStore {
    postgres: PgPool,
}

impl PgFeedbackStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn create(&self, candidate: NewFeedback) -> Result<Feedback, StoreError> {
        feedback::post::create_feedback(candidate, &self.postgres).await
    }

    async fn list(&self, filter: Option<Rating>) -> Result<Vec<Feedback>, StoreError> {
        feedback::get::list_feedback(filter, &self.postgres).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.postgres).await?;
        Ok(())
    }
}
