use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::models::{FavoriteCharacter, FavoritePlanet};
use crate::database::{CharacterRepo, FavoriteRepo, PlanetRepo, UserRepo};
use crate::error::ApiError;

use super::{deleted, required_id};

#[derive(Debug, Deserialize)]
pub struct FavoritePlanetPayload {
    pub user_id: Option<i64>,
    pub planet_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteCharacterPayload {
    pub user_id: Option<i64>,
    pub character_id: Option<i64>,
}

async fn ensure_user(pool: &SqlitePool, user_id: i64) -> Result<(), ApiError> {
    if !UserRepo::new(pool).exists(user_id).await? {
        return Err(ApiError::not_found("User"));
    }
    Ok(())
}

/// POST /api/favorite/planet
pub async fn create_planet(
    State(pool): State<SqlitePool>,
    Json(payload): Json<FavoritePlanetPayload>,
) -> Result<(StatusCode, Json<FavoritePlanet>), ApiError> {
    let user_id = required_id(payload.user_id, "user_id")?;
    let planet_id = required_id(payload.planet_id, "planet_id")?;

    ensure_user(&pool, user_id).await?;
    if !PlanetRepo::new(&pool).exists(planet_id).await? {
        return Err(ApiError::not_found("Planet"));
    }

    let repo = FavoriteRepo::new(&pool);
    if repo.planet_exists(user_id, planet_id).await? {
        return Err(ApiError::conflict("Planet is already a favorite"));
    }

    let favorite = repo.add_planet(user_id, planet_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/favorite/planet/:user_id/:planet_id
pub async fn delete_planet(
    State(pool): State<SqlitePool>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    FavoriteRepo::new(&pool)
        .remove_planet(user_id, planet_id)
        .await?;

    Ok(deleted("Favorite Planet"))
}

/// POST /api/favorite/character
pub async fn create_character(
    State(pool): State<SqlitePool>,
    Json(payload): Json<FavoriteCharacterPayload>,
) -> Result<(StatusCode, Json<FavoriteCharacter>), ApiError> {
    let user_id = required_id(payload.user_id, "user_id")?;
    let character_id = required_id(payload.character_id, "character_id")?;

    ensure_user(&pool, user_id).await?;
    if !CharacterRepo::new(&pool).exists(character_id).await? {
        return Err(ApiError::not_found("Character"));
    }

    let repo = FavoriteRepo::new(&pool);
    if repo.character_exists(user_id, character_id).await? {
        return Err(ApiError::conflict("Character is already a favorite"));
    }

    let favorite = repo.add_character(user_id, character_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/favorite/character/:user_id/:character_id
pub async fn delete_character(
    State(pool): State<SqlitePool>,
    Path((user_id, character_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    FavoriteRepo::new(&pool)
        .remove_character(user_id, character_id)
        .await?;

    Ok(deleted("Favorite Character"))
}
