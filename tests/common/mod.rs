#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use feedback_be::{
    config::Config,
    create_app,
    db::{FeedbackStore, StoreError},
    models::{Feedback, NewFeedback, Rating},
    state::AppState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Store whose backing database is always down.
pub struct BrokenStore;

#[async_trait]
impl FeedbackStore for BrokenStore {
    async fn create(&self, _candidate: NewFeedback) -> Result<Feedback, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn list(&self, _filter: Option<Rating>) -> Result<Vec<Feedback>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

pub fn memory_app() -> Router {
    create_app(AppState::in_memory(), &test_config())
}

pub fn broken_app() -> Router {
    create_app(AppState::new(Arc::new(BrokenStore)), &test_config())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}
