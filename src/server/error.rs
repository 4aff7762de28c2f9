//! HTTP error mapping for the REST API.
//!
//! [`ApiError`] folds every failure mode into one enum with an
//! [`IntoResponse`] impl, so handlers can use `?` and still produce a
//! JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::WaresError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested item does not exist.
    #[error("not found: item {0}")]
    NotFound(u64),

    /// The request payload failed validation.
    #[error("invalid request: {0}")]
    Invalid(String),

    /// A store or serialization failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<WaresError> for ApiError {
    fn from(err: WaresError) -> Self {
        match err {
            WaresError::Validation(msg) => Self::Invalid(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(id) => (StatusCode::NOT_FOUND, format!("item {id} not found")),
            Self::Invalid(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
