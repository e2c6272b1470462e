use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::rating::Rating;

pub const MAX_CUSTOMER_NAME_CHARS: usize = 255;

/// Most recent records returned by a single list call.
pub const LIST_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub customer_name: String,
    pub message: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

/// A submission that already passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub customer_name: String,
    pub message: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
