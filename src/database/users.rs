use sqlx::SqlitePool;

use super::models::{Character, Planet, User};
use super::DbError;

/// Fields persisted for a new user. `password` must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, is_active FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn email_taken(&self, email: &str) -> Result<bool, DbError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Registration stores the username into `name`, so duplicate-username
    /// checks run against that column.
    pub async fn name_taken(&self, name: &str) -> Result<bool, DbError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn create(&self, user: NewUser) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, is_active)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, email, password, is_active",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Delete a user; both favorite join tables cascade away.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User"));
        }
        Ok(())
    }

    /// Planets this user has favorited, serialized in their plain form.
    pub async fn favorite_planets(&self, user_id: i64) -> Result<Vec<Planet>, DbError> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT p.id, p.name, p.diameter, p.rotation_period, p.population, p.climate, p.terrain
             FROM planets p
             INNER JOIN favorite_planets f ON f.planet_id = p.id
             WHERE f.user_id = ?
             ORDER BY p.id",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(planets)
    }

    /// Characters this user has favorited, homeworld joined in.
    pub async fn favorite_characters(&self, user_id: i64) -> Result<Vec<Character>, DbError> {
        let characters = sqlx::query_as::<_, Character>(
            "SELECT c.id, c.name, c.hair_color, c.eye_color, c.gender, c.description,
                    p.name AS homeworld
             FROM characters c
             INNER JOIN planets p ON p.id = c.planet_id
             INNER JOIN favorite_characters f ON f.character_id = c.id
             WHERE f.user_id = ?
             ORDER BY c.id",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(characters)
    }
}
