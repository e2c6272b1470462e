use std::time::{Duration, Instant};

use crate::{
    client::api::ClientError,
    models::{Feedback, NewFeedback, Rating},
};

pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load feedback. Please try again.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Submission failed. Please try again.";
pub const THANK_YOU_MESSAGE: &str = "Thank you for your feedback!";

/// Confirmation banner that disappears on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub customer_name: String,
    pub message: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub feedbacks: Vec<Feedback>,
    pub form: FormState,
    pub filter: Option<Rating>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.form.customer_name = name.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.message = message.into();
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.form.rating = rating;
    }

    /// Returns `true` when the filter actually changed and a re-fetch is due.
    pub fn set_filter(&mut self, filter: Option<Rating>) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// The submit control is disabled while any request is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Feedback>, ClientError>) {
        match result {
            Ok(feedbacks) => {
                self.feedbacks = feedbacks;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("Error fetching feedback: {}", err);
                self.feedbacks.clear();
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Checks required fields and marks the submission in flight.
    /// Returns `None` if the submission must not be sent.
    pub fn begin_submit(&mut self) -> Option<NewFeedback> {
        if !self.can_submit() {
            return None;
        }

        if self.form.customer_name.trim().is_empty() || self.form.message.trim().is_empty() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;

        Some(NewFeedback {
            customer_name: self.form.customer_name.clone(),
            message: self.form.message.clone(),
            rating: self.form.rating,
        })
    }

    /// Clears the text fields but keeps the rating for the next entry.
    /// `loading` stays set until the follow-up fetch finishes.
    pub fn submit_succeeded(&mut self, now: Instant) {
        self.form.customer_name.clear();
        self.form.message.clear();
        self.notice = Some(Notice {
            text: THANK_YOU_MESSAGE.to_string(),
            expires_at: now + NOTICE_DURATION,
        });
    }

    pub fn submit_failed(&mut self, err: &ClientError) {
        tracing::warn!("Submission error: {}", err);
        self.error = Some(
            err.server_message()
                .unwrap_or(SUBMIT_FAILED_MESSAGE)
                .to_string(),
        );
        self.loading = false;
    }

    pub fn dismiss_expired_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }
    }
}
