//! HTTP rendering of store failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::StoreError;

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure of a request, mapped onto a status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Unknown or malformed id in the path
    NotFound,
    /// Query parameters that could not be parsed
    InvalidQuery(StoreError),
    /// Request rejected by the store
    Rejected(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::NotFound => "Not found".to_string(),
            ApiError::InvalidQuery(err) => format!("invalid query parameters: {err}"),
            ApiError::Rejected(err) => err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Rejected(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.message();
        debug!(status = %status, error = %error, "request failed");
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidQuery(StoreError::validation("page", "bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Conflict("again".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(StoreError::not_found(EntityKind::Device, "x")).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_query_message_keeps_prefix() {
        let err = ApiError::InvalidQuery(StoreError::validation("per_page", "nope"));
        assert_eq!(
            err.message(),
            "invalid query parameters: Validation error: per_page: nope"
        );
    }
}
