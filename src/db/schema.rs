use sqlx::PgPool;

use crate::db::StoreError;

const CREATE_FEEDBACK_TABLE: &str = "CREATE TABLE IF NOT EXISTS feedback (
    id BIGSERIAL PRIMARY KEY,
    customer_name VARCHAR(255) NOT NULL,
    message TEXT NOT NULL,
    rating SMALLINT NOT NULL CHECK (rating BETWEEN 1 AND 5),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS feedback_created_at_idx ON feedback (created_at DESC, id DESC)";

/// Creates the feedback table if it is missing. Safe to run on every boot.
pub async fn ensure_schema(postgres: &PgPool) -> Result<(), StoreError> {
    for statement in [CREATE_FEEDBACK_TABLE, CREATE_CREATED_AT_INDEX] {
        sqlx::query(statement).execute(postgres).await?;
    }

    tracing::info!("Feedback schema ready");
    Ok(())
}
