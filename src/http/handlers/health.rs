use axum::{Json, extract::State, response::Response};
use serde_json::{Value, json};

use crate::{errors::AppError, state::AppState};

pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, Response> {
    state.store.ping().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        AppError::StoreUnavailable(e).to_response()
    })?;

    Ok(Json(json!({ "status": "ok" })))
}
