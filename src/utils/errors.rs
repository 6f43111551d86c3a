use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error with a fixed mapping onto HTTP status codes.
///
/// Every fallible handler and middleware returns this type so the wire
/// format stays uniform: a JSON object with an `error` message, plus a
/// `fields` map for validation failures.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request body or parameters.
    BadRequest(String),
    /// Field-level validation failures, keyed by field name.
    Validation(BTreeMap<String, Vec<String>>),
    /// Missing or unusable credentials.
    Unauthorized(String),
    /// Authenticated, but the caller's roles do not cover the resource.
    Forbidden(String),
    /// No resource at the requested path.
    NotFound(String),
    /// Anything the caller cannot fix.
    Internal(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation(fields) => Json(json!({
                "error": "Validation failed",
                "fields": fields,
            })),
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => Json(json!({ "error": msg })),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "request failed with internal error");
                Json(json!({ "error": "Internal server error" }))
            }
        };

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}
