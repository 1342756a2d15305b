use sqlx::SqlitePool;

use super::models::{FavoriteCharacter, FavoritePlanet};
use super::DbError;

pub struct FavoriteRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FavoriteRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn planet_exists(&self, user_id: i64, planet_id: i64) -> Result<bool, DbError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT user_id FROM favorite_planets WHERE user_id = ? AND planet_id = ?",
        )
        .bind(user_id)
        .bind(planet_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(found.is_some())
    }

    pub async fn add_planet(
        &self,
        user_id: i64,
        planet_id: i64,
    ) -> Result<FavoritePlanet, DbError> {
        sqlx::query("INSERT INTO favorite_planets (user_id, planet_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(planet_id)
            .execute(self.pool)
            .await?;

        Ok(FavoritePlanet { user_id, planet_id })
    }

    /// Delete by exact match on both keys.
    pub async fn remove_planet(&self, user_id: i64, planet_id: i64) -> Result<(), DbError> {
        let result =
            sqlx::query("DELETE FROM favorite_planets WHERE user_id = ? AND planet_id = ?")
                .bind(user_id)
                .bind(planet_id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Favorite Planet"));
        }
        Ok(())
    }

    pub async fn character_exists(
        &self,
        user_id: i64,
        character_id: i64,
    ) -> Result<bool, DbError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT user_id FROM favorite_characters WHERE user_id = ? AND character_id = ?",
        )
        .bind(user_id)
        .bind(character_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(found.is_some())
    }

    pub async fn add_character(
        &self,
        user_id: i64,
        character_id: i64,
    ) -> Result<FavoriteCharacter, DbError> {
        sqlx::query("INSERT INTO favorite_characters (user_id, character_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(character_id)
            .execute(self.pool)
            .await?;

        Ok(FavoriteCharacter {
            user_id,
            character_id,
        })
    }

    /// Delete by exact match on both keys.
    pub async fn remove_character(&self, user_id: i64, character_id: i64) -> Result<(), DbError> {
        let result =
            sqlx::query("DELETE FROM favorite_characters WHERE user_id = ? AND character_id = ?")
                .bind(user_id)
                .bind(character_id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Favorite Character"));
        }
        Ok(())
    }
}
