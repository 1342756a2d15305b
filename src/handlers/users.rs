use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::models::{UserFavoritesResponse, UserResponse};
use crate::database::users::NewUser;
use crate::database::UserRepo;
use crate::error::ApiError;

use super::{deleted, required};

/// Request body for POST /api/user.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// Request body for POST /api/register.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))
}

/// GET /api/user
pub async fn list(State(pool): State<SqlitePool>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&pool).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/user/favorites - every user with their favorites nested.
pub async fn list_with_favorites(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<UserFavoritesResponse>>, ApiError> {
    let repo = UserRepo::new(&pool);

    let mut out = Vec::new();
    for user in repo.list().await? {
        let planets = repo.favorite_planets(user.id).await?;
        let characters = repo.favorite_characters(user.id).await?;
        out.push(UserFavoritesResponse::new(user, planets, characters));
    }

    Ok(Json(out))
}

/// POST /api/user
pub async fn create(
    State(pool): State<SqlitePool>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    let repo = UserRepo::new(&pool);
    if repo.email_taken(&email).await? {
        return Err(ApiError::conflict("Email ya esta en uso !"));
    }

    let user = repo
        .create(NewUser {
            name: payload.name,
            email,
            password: hash_password(&password)?,
            is_active: payload.is_active.unwrap_or(true),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/register - like create, but all fields are required and the
/// username must be free. The username lands in the `name` column.
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;
    let email = required(payload.email, "email")?;

    let repo = UserRepo::new(&pool);
    if repo.name_taken(&username).await? {
        return Err(ApiError::conflict("Username ya esta en uso !"));
    }
    if repo.email_taken(&email).await? {
        return Err(ApiError::conflict("Email ya esta en uso !"));
    }

    let user = repo
        .create(NewUser {
            name: username,
            email,
            password: hash_password(&password)?,
            is_active: true,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// DELETE /api/user/:id - cascades to both favorite join tables.
pub async fn delete(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    UserRepo::new(&pool).delete(id).await?;
    Ok(deleted("User"))
}
