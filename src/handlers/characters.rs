use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::characters::CharacterFields;
use crate::database::models::Character;
use crate::database::{CharacterRepo, PlanetRepo};
use crate::error::ApiError;

use super::{deleted, required, required_id};

/// Request body for character create and update. `name` and `planet_id` are
/// required; the rest defaults to the empty string.
#[derive(Debug, Deserialize)]
pub struct CharacterPayload {
    pub name: Option<String>,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub description: String,
    pub planet_id: Option<i64>,
}

impl CharacterPayload {
    fn into_fields(self) -> Result<CharacterFields, ApiError> {
        Ok(CharacterFields {
            name: required(self.name, "name")?,
            hair_color: self.hair_color,
            eye_color: self.eye_color,
            gender: self.gender,
            description: self.description,
            planet_id: required_id(self.planet_id, "planet_id")?,
        })
    }
}

/// The homeworld join requires planet_id to resolve; check it up front so a
/// dangling reference reports the planet as missing instead of surfacing a
/// constraint violation.
async fn ensure_planet(pool: &SqlitePool, planet_id: i64) -> Result<(), ApiError> {
    if !PlanetRepo::new(pool).exists(planet_id).await? {
        return Err(ApiError::not_found("Planet"));
    }
    Ok(())
}

/// GET /api/character
pub async fn list(State(pool): State<SqlitePool>) -> Result<Json<Vec<Character>>, ApiError> {
    let characters = CharacterRepo::new(&pool).list().await?;
    Ok(Json(characters))
}

/// GET /api/character/:id
pub async fn get(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Character>, ApiError> {
    let character = CharacterRepo::new(&pool).get(id).await?;
    Ok(Json(character))
}

/// POST /api/character
pub async fn create(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CharacterPayload>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let fields = payload.into_fields()?;
    ensure_planet(&pool, fields.planet_id).await?;

    let character = CharacterRepo::new(&pool).create(fields).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /api/character/:id - full replace; 404 when the id is absent.
pub async fn update(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<CharacterPayload>,
) -> Result<Json<Character>, ApiError> {
    let fields = payload.into_fields()?;
    ensure_planet(&pool, fields.planet_id).await?;

    let character = CharacterRepo::new(&pool).update(id, fields).await?;
    Ok(Json(character))
}

/// DELETE /api/character/:id - cascades to favorite rows.
pub async fn delete(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    CharacterRepo::new(&pool).delete(id).await?;
    Ok(deleted("Character"))
}
