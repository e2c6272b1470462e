use sqlx::PgPool;

use crate::{
    db::{
        StoreError,
        feedback::{FEEDBACK_COLUMNS, FeedbackRow},
    },
    models::{Feedback, LIST_LIMIT, Rating},
};

pub async fn list_feedback(
    filter: Option<Rating>,
    postgres: &PgPool,
) -> Result<Vec<Feedback>, StoreError> {
    let rows = sqlx::query_as::<_, FeedbackRow>(&format!(
        "SELECT {FEEDBACK_COLUMNS}
			FROM feedback
			WHERE ($1::SMALLINT IS NULL OR rating = $1)
			ORDER BY created_at DESC, id DESC
			LIMIT $2"
    ))
    .bind(filter.map(i16::from))
    .bind(LIST_LIMIT as i64)
    .fetch_all(postgres)
    .await?;

    tracing::debug!("Fetched {} feedback rows (filter: {:?})", rows.len(), filter);

    rows.into_iter().map(Feedback::try_from).collect()
}
