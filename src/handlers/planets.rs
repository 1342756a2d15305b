use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::models::Planet;
use crate::database::planets::PlanetFields;
use crate::database::PlanetRepo;
use crate::error::ApiError;

use super::{deleted, required};

/// Request body for planet create and update. Only `name` is required;
/// everything else defaults to the empty string.
#[derive(Debug, Deserialize)]
pub struct PlanetPayload {
    pub name: Option<String>,
    #[serde(default)]
    pub diameter: String,
    #[serde(default)]
    pub rotation_period: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub terrain: String,
}

impl PlanetPayload {
    fn into_fields(self) -> Result<PlanetFields, ApiError> {
        Ok(PlanetFields {
            name: required(self.name, "name")?,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
            population: self.population,
            climate: self.climate,
            terrain: self.terrain,
        })
    }
}

/// GET /api/planet
pub async fn list(State(pool): State<SqlitePool>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = PlanetRepo::new(&pool).list().await?;
    Ok(Json(planets))
}

/// GET /api/planet/:id
pub async fn get(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Planet>, ApiError> {
    let planet = PlanetRepo::new(&pool).get(id).await?;
    Ok(Json(planet))
}

/// POST /api/planet
pub async fn create(
    State(pool): State<SqlitePool>,
    Json(payload): Json<PlanetPayload>,
) -> Result<(StatusCode, Json<Planet>), ApiError> {
    let fields = payload.into_fields()?;
    let planet = PlanetRepo::new(&pool).create(fields).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// PUT /api/planet/:id - full replace; 404 when the id is absent.
pub async fn update(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<PlanetPayload>,
) -> Result<Json<Planet>, ApiError> {
    let fields = payload.into_fields()?;
    let planet = PlanetRepo::new(&pool).update(id, fields).await?;

    Ok(Json(planet))
}

/// DELETE /api/planet/:id - cascades to characters and favorite rows.
pub async fn delete(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    PlanetRepo::new(&pool).delete(id).await?;
    Ok(deleted("Planet"))
}
