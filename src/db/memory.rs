use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    db::{FeedbackStore, StoreError},
    models::{Feedback, LIST_LIMIT, NewFeedback, Rating},
};

#[derive(Debug, Default)]
struct FeedbackLog {
    next_id: i64,
    last_created_at: Option<DateTime<Utc>>,
    records: Vec<Feedback>,
}

/// Process-local store used when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeedbackStore {
    log: Arc<Mutex<FeedbackLog>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.log.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn create(&self, candidate: NewFeedback) -> Result<Feedback, StoreError> {
        let mut log = self.log.lock().await;
        log.next_id += 1;

        // Never step back in time, even if the wall clock does.
        let now = Utc::now();
        let created_at = log.last_created_at.map_or(now, |last| last.max(now));
        log.last_created_at = Some(created_at);

        let feedback = Feedback {
            id: log.next_id,
            customer_name: candidate.customer_name,
            message: candidate.message,
            rating: candidate.rating,
            created_at,
        };
        log.records.push(feedback.clone());

        tracing::info!(
            "Stored feedback {} (rating {})",
            feedback.id,
            feedback.rating
        );

        Ok(feedback)
    }

    async fn list(&self, filter: Option<Rating>) -> Result<Vec<Feedback>, StoreError> {
        let log = self.log.lock().await;

        let mut matching: Vec<Feedback> = log
            .records
            .iter()
            .filter(|f| filter.is_none_or(|rating| f.rating == rating))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        matching.truncate(LIST_LIMIT);

        Ok(matching)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
