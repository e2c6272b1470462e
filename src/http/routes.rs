use axum::{Router, routing::get};

use crate::{
    http::handlers::{create_feedback_handler, health_handler, list_feedback_handler},
    state::AppState,
};

fn feedback_routes() -> Router<AppState> {
    Router::new().route(
        "/feedback",
        get(list_feedback_handler).post(create_feedback_handler),
    )
}

/// `/feedback` at the root and again under `/api`, where the form UI calls it.
pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .merge(feedback_routes())
        .nest("/api", feedback_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}
