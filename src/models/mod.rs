pub mod feedback;
pub mod rating;

pub use feedback::{Feedback, LIST_LIMIT, MessageResponse, NewFeedback};
pub use rating::Rating;
