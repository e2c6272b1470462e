use std::sync::Arc;

use crate::db::{FeedbackStore, MemoryFeedbackStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryFeedbackStore::new()))
    }
}
