// HTTP API error types
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::database::DbError;

/// API error with appropriate status codes and client-facing JSON bodies.
///
/// Not-found errors keep the `{"status": false, "msg": ...}` envelope the
/// delete handlers also use for their success bodies; everything else renders
/// as a plain `{"msg": ...}` object.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - required field missing or empty
    Validation(String),

    /// 400 Bad Request - duplicate username/email or favorite pair
    Conflict(String),

    /// 404 Not Found - entity or favorite pair absent
    NotFound(&'static str),

    /// 500 Internal Server Error - logged, generic body returned
    Database(sqlx::Error),

    /// 500 Internal Server Error - anything else (hashing, etc.)
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn not_found(resource: &'static str) -> Self {
        ApiError::NotFound(resource)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => {
                json!({ "msg": msg })
            }
            ApiError::NotFound(resource) => {
                json!({ "status": false, "msg": format!("{} doesn't exist", resource) })
            }
            ApiError::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("database error: {}", e);
                json!({ "msg": "an internal error occurred" })
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                json!({ "msg": "an internal error occurred" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource } => ApiError::NotFound(resource),
            DbError::Sqlx(e) => ApiError::Database(e),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}
