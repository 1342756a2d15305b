use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::ApiError;

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;

/// Extract a required string field, rejecting absent or blank values before
/// anything touches the database.
pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{field} is required"))),
    }
}

pub(crate) fn required_id(value: Option<i64>, field: &str) -> Result<i64, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("{field} is required")))
}

/// Standard body for successful deletes: `{"status": true, "msg": "<Entity> deleted"}`.
pub(crate) fn deleted(entity: &str) -> Json<Value> {
    Json(json!({ "status": true, "msg": format!("{} deleted", entity) }))
}

/// GET / - listing of every route the API serves.
pub async fn sitemap() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Star Wars API",
        "version": version,
        "endpoints": [
            "GET /",
            "GET /health",
            "GET /api/user",
            "GET /api/user/favorites",
            "POST /api/user",
            "POST /api/register",
            "DELETE /api/user/:id",
            "GET /api/character",
            "GET /api/character/:id",
            "POST /api/character",
            "PUT /api/character/:id",
            "DELETE /api/character/:id",
            "GET /api/planet",
            "GET /api/planet/:id",
            "POST /api/planet",
            "PUT /api/planet/:id",
            "DELETE /api/planet/:id",
            "POST /api/favorite/planet",
            "DELETE /api/favorite/planet/:user_id/:planet_id",
            "POST /api/favorite/character",
            "DELETE /api/favorite/character/:user_id/:character_id",
        ]
    }))
}

/// GET /health - database liveness probe.
pub async fn health(State(pool): State<SqlitePool>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
