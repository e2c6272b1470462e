use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Feedback, MessageResponse, NewFeedback, Rating};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request rejected with {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Message the server attached to a rejected request, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn list(&self, filter: Option<Rating>) -> Result<Vec<Feedback>, ClientError>;

    /// Returns the server's confirmation message.
    async fn submit(&self, candidate: &NewFeedback) -> Result<String, ClientError>;
}

#[derive(Debug, Clone)]
pub struct FeedbackClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ListQuery {
    rating: u8,
}

impl FeedbackClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn feedback_url(&self) -> String {
        format!("{}/feedback", self.base_url)
    }

    async fn rejected(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = response
            .json::<MessageResponse>()
            .await
            .ok()
            .map(|body| body.message)
            .filter(|m| !m.is_empty());

        ClientError::Rejected { status, message }
    }
}

#[async_trait]
impl FeedbackApi for FeedbackClient {
    async fn list(&self, filter: Option<Rating>) -> Result<Vec<Feedback>, ClientError> {
        let mut request = self.http.get(self.feedback_url());
        if let Some(rating) = filter {
            request = request.query(&ListQuery {
                rating: rating.value(),
            });
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        response
            .json::<Vec<Feedback>>()
            .await
            .map_err(|e| ClientError::Decode(format!("Invalid feedback list: {}", e)))
    }

    async fn submit(&self, candidate: &NewFeedback) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.feedback_url())
            .json(candidate)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(Self::rejected(response).await);
        }

        response
            .json::<MessageResponse>()
            .await
            .map(|body| body.message)
            .map_err(|e| ClientError::Decode(format!("Invalid confirmation: {}", e)))
    }
}
