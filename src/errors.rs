use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{db::StoreError, validation::ValidationErrors};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to save feedback: {0}")]
    SaveFailed(#[source] StoreError),

    #[error("Failed to load feedback: {0}")]
    LoadFailed(#[source] StoreError),

    #[error("Feedback store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Startup error: {0}")]
    Startup(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SaveFailed(_) | AppError::LoadFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_) | AppError::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Store details are logged by the caller and never leave the server.
    pub fn to_response(&self) -> Response {
        let body = match self {
            AppError::Validation(errors) => json!({
                "message": errors.summary(),
                "errors": errors,
            }),
            AppError::BadRequest(msg) => json!({ "message": msg }),
            AppError::SaveFailed(_) => json!({ "message": "Failed to save feedback" }),
            AppError::LoadFailed(_) => json!({ "message": "Failed to load feedback" }),
            AppError::StoreUnavailable(_) => json!({ "message": "Feedback store unavailable" }),
            AppError::Config(_) | AppError::Startup(_) => {
                json!({ "message": "Unexpected server error" })
            }
        };

        (self.status(), Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let mut errors = ValidationErrors::default();
        errors.add("message", "The message field is required.");

        assert_eq!(
            AppError::Validation(errors).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::BadRequest("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::SaveFailed(StoreError::Unavailable("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StoreUnavailable(StoreError::Unavailable("down".into())).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
