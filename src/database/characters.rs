use sqlx::SqlitePool;

use super::models::Character;
use super::DbError;

/// Mutable character fields. `name` and `planet_id` are required and
/// validated (including planet existence) before this layer is reached.
#[derive(Debug, Clone)]
pub struct CharacterFields {
    pub name: String,
    pub hair_color: String,
    pub eye_color: String,
    pub gender: String,
    pub description: String,
    pub planet_id: i64,
}

/// All reads join `planets` so the serialized form always carries the
/// homeworld name; a row whose planet is gone does not resolve.
const SELECT_JOINED: &str =
    "SELECT c.id, c.name, c.hair_color, c.eye_color, c.gender, c.description,
            p.name AS homeworld
     FROM characters c
     INNER JOIN planets p ON p.id = c.planet_id";

pub struct CharacterRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CharacterRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Character>, DbError> {
        let characters =
            sqlx::query_as::<_, Character>(&format!("{} ORDER BY c.id", SELECT_JOINED))
                .fetch_all(self.pool)
                .await?;

        Ok(characters)
    }

    pub async fn get(&self, id: i64) -> Result<Character, DbError> {
        sqlx::query_as::<_, Character>(&format!("{} WHERE c.id = ?", SELECT_JOINED))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Character"))
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM characters WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn create(&self, fields: CharacterFields) -> Result<Character, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO characters (name, hair_color, eye_color, gender, description, planet_id)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&fields.name)
        .bind(&fields.hair_color)
        .bind(&fields.eye_color)
        .bind(&fields.gender)
        .bind(&fields.description)
        .bind(fields.planet_id)
        .fetch_one(self.pool)
        .await?;

        self.get(id).await
    }

    /// Full replace of the mutable fields; 404s when the id is absent.
    pub async fn update(&self, id: i64, fields: CharacterFields) -> Result<Character, DbError> {
        let result = sqlx::query(
            "UPDATE characters
             SET name = ?, hair_color = ?, eye_color = ?, gender = ?, description = ?, planet_id = ?
             WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(&fields.hair_color)
        .bind(&fields.eye_color)
        .bind(&fields.gender)
        .bind(&fields.description)
        .bind(fields.planet_id)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Character"));
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Character"));
        }
        Ok(())
    }
}
