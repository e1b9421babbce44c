//! API error type and its HTTP status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::domain::shared::StoreError;

/// Errors a handler can return.
///
/// Taxonomy: validation errors map to 400, missing rows to 404, and
/// unexpected store faults surface as 500. Every 4xx body carries a short
/// human-readable `message` field, nothing structured.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No row with the given ID.
    #[error("{0}")]
    NotFound(String),
    /// Missing or invalid input.
    #[error("{0}")]
    Invalid(String),
    /// Underlying store fault outside the create path.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
