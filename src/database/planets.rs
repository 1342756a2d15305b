use sqlx::SqlitePool;

use super::models::Planet;
use super::DbError;

/// Fields a client can set on a planet; `name` is the only required one and
/// is validated before this layer is reached.
#[derive(Debug, Clone)]
pub struct PlanetFields {
    pub name: String,
    pub diameter: String,
    pub rotation_period: String,
    pub population: String,
    pub climate: String,
    pub terrain: String,
}

pub struct PlanetRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PlanetRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Planet>, DbError> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT id, name, diameter, rotation_period, population, climate, terrain
             FROM planets ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(planets)
    }

    pub async fn get(&self, id: i64) -> Result<Planet, DbError> {
        sqlx::query_as::<_, Planet>(
            "SELECT id, name, diameter, rotation_period, population, climate, terrain
             FROM planets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Planet"))
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM planets WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn create(&self, fields: PlanetFields) -> Result<Planet, DbError> {
        let planet = sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (name, diameter, rotation_period, population, climate, terrain)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, name, diameter, rotation_period, population, climate, terrain",
        )
        .bind(&fields.name)
        .bind(&fields.diameter)
        .bind(&fields.rotation_period)
        .bind(&fields.population)
        .bind(&fields.climate)
        .bind(&fields.terrain)
        .fetch_one(self.pool)
        .await?;

        Ok(planet)
    }

    /// Full replace of the mutable fields; 404s when the id is absent.
    pub async fn update(&self, id: i64, fields: PlanetFields) -> Result<Planet, DbError> {
        sqlx::query_as::<_, Planet>(
            "UPDATE planets
             SET name = ?, diameter = ?, rotation_period = ?, population = ?, climate = ?, terrain = ?
             WHERE id = ?
             RETURNING id, name, diameter, rotation_period, population, climate, terrain",
        )
        .bind(&fields.name)
        .bind(&fields.diameter)
        .bind(&fields.rotation_period)
        .bind(&fields.population)
        .bind(&fields.climate)
        .bind(&fields.terrain)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Planet"))
    }

    /// Delete a planet; its characters and favorite rows cascade away.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Planet"));
        }
        Ok(())
    }
}
