use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    errors::AppError,
    http::extract::RatingFilter,
    models::{Feedback, MessageResponse},
    state::AppState,
    validation::FeedbackInput,
};

pub async fn list_feedback_handler(
    State(state): State<AppState>,
    RatingFilter(filter): RatingFilter,
) -> Result<Json<Vec<Feedback>>, Response> {
    let feedback = state.store.list(filter).await.map_err(|e| {
        tracing::error!("Failed to list feedback: {}", e);
        AppError::LoadFailed(e).to_response()
    })?;

    Ok(Json(feedback))
}

pub async fn create_feedback_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), Response> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!("Rejected feedback body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text()).to_response()
    })?;

    let candidate = input.validate().map_err(|errors| {
        tracing::warn!("Feedback failed validation: {}", errors);
        AppError::Validation(errors).to_response()
    })?;

    match state.store.create(candidate).await {
        Ok(feedback) => {
            tracing::info!(
                "Feedback received from {} (ID: {})",
                feedback.customer_name,
                feedback.id
            );
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Feedback received")),
            ))
        }
        Err(err) => {
            tracing::error!("Error saving feedback: {}", err);
            Err(AppError::SaveFailed(err).to_response())
        }
    }
}
