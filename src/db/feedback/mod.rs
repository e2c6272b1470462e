pub mod get;
pub mod post;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::{
    db::StoreError,
    models::{Feedback, Rating},
};

pub(crate) const FEEDBACK_COLUMNS: &str = "id, customer_name, message, rating, created_at";

#[derive(Debug, FromRow)]
pub(crate) struct FeedbackRow {
    pub id: i64,
    pub customer_name: String,
    pub message: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<FeedbackRow> for Feedback {
    type Error = StoreError;

    fn try_from(row: FeedbackRow) -> Result<Self, Self::Error> {
        let rating = Rating::try_from(row.rating).map_err(|e| StoreError::CorruptRow {
            id: row.id,
            reason: e.to_string(),
        })?;

        Ok(Feedback {
            id: row.id,
            customer_name: row.customer_name,
            message: row.message,
            rating,
            created_at: row.created_at,
        })
    }
}
