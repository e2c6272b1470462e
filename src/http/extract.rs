use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::{errors::AppError, models::Rating};

#[derive(Deserialize)]
struct RatingQuery {
    rating: Option<String>,
}

/// Optional `?rating=N` list filter. An empty value means no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingFilter(pub Option<Rating>);

impl<S> FromRequestParts<S> for RatingFilter
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<RatingQuery>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {}", e)))?;

        RatingFilter::parse(query.rating.as_deref())
    }
}

impl RatingFilter {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Ok(RatingFilter(None));
        };

        raw.parse::<i64>()
            .ok()
            .and_then(|value| Rating::new(value).ok())
            .map(|rating| RatingFilter(Some(rating)))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "The rating filter must be an integer between {} and {}.",
                    Rating::MIN,
                    Rating::MAX
                ))
            })
    }
}
