//! Feedback form and list, driven against the HTTP API.
//!
//! [`UiState`] holds everything the screen shows. [`FeedbackApp`] moves it
//! through fetch and submit cycles, and [`view::render`] draws it.

pub mod api;
pub mod app;
pub mod state;
pub mod view;

pub use api::{ClientError, FeedbackApi, FeedbackClient};
pub use app::FeedbackApp;
pub use state::{Notice, UiState};
