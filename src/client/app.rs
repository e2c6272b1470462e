use std::time::Instant;

use crate::{
    client::{api::FeedbackApi, state::UiState},
    models::Rating,
};

/// Runs the fetch and submit cycles of the feedback screen.
pub struct FeedbackApp<A: FeedbackApi> {
    api: A,
    pub state: UiState,
}

impl<A: FeedbackApi> FeedbackApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: UiState::new(),
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.state.begin_fetch();
        let result = self.api.list(self.state.filter).await;
        self.state.finish_fetch(result);
    }

    pub async fn change_filter(&mut self, filter: Option<Rating>) {
        if self.state.set_filter(filter) {
            self.refresh().await;
        }
    }

    /// Returns `true` if the server accepted the submission.
    pub async fn submit(&mut self) -> bool {
        let Some(candidate) = self.state.begin_submit() else {
            return false;
        };

        match self.api.submit(&candidate).await {
            Ok(confirmation) => {
                tracing::debug!("Server confirmed submission: {}", confirmation);
                self.state.submit_succeeded(Instant::now());
                self.refresh().await;
                true
            }
            Err(err) => {
                self.state.submit_failed(&err);
                false
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.state.dismiss_expired_notice(now);
    }
}
