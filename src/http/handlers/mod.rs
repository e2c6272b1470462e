pub mod feedback;
pub mod health;

pub use feedback::{create_feedback_handler, list_feedback_handler};
pub use health::health_handler;
