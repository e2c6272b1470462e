use sqlx::PgPool;

use crate::{
    db::{
        StoreError,
        feedback::{FEEDBACK_COLUMNS, FeedbackRow},
    },
    models::{Feedback, NewFeedback},
};

pub async fn create_feedback(
    candidate: NewFeedback,
    postgres: &PgPool,
) -> Result<Feedback, StoreError> {
    let row = sqlx::query_as::<_, FeedbackRow>(&format!(
        "INSERT INTO feedback (customer_name, message, rating)
        VALUES ($1, $2, $3)
        RETURNING {FEEDBACK_COLUMNS}"
    ))
    .bind(&candidate.customer_name)
    .bind(&candidate.message)
    .bind(i16::from(candidate.rating))
    .fetch_one(postgres)
    .await?;

    let feedback = Feedback::try_from(row)?;

    tracing::info!(
        "Stored feedback {} (rating {})",
        feedback.id,
        feedback.rating
    );

    Ok(feedback)
}
