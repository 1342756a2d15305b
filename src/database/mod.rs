use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

pub mod characters;
pub mod favorites;
pub mod models;
pub mod planets;
pub mod users;

pub use characters::CharacterRepo;
pub use favorites::FavoriteRepo;
pub use planets::PlanetRepo;
pub use users::UserRepo;

/// Errors from the repository layer.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} doesn't exist")]
    NotFound { resource: &'static str },
}

impl DbError {
    pub fn not_found(resource: &'static str) -> Self {
        DbError::NotFound { resource }
    }
}

/// Open a SQLite pool with foreign-key enforcement on every connection.
///
/// Cascading deletes rely on the database constraints, so foreign_keys must
/// be enabled; SQLite defaults it off per connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    info!("connected to {}", database_url);
    Ok(pool)
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        diameter TEXT NOT NULL DEFAULT '',
        rotation_period TEXT NOT NULL DEFAULT '',
        population TEXT NOT NULL DEFAULT '',
        climate TEXT NOT NULL DEFAULT '',
        terrain TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        hair_color TEXT NOT NULL DEFAULT '',
        eye_color TEXT NOT NULL DEFAULT '',
        gender TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        planet_id INTEGER NOT NULL REFERENCES planets(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favorite_planets (
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        planet_id INTEGER NOT NULL REFERENCES planets(id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, planet_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favorite_characters (
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        character_id INTEGER NOT NULL REFERENCES characters(id) ON DELETE CASCADE,
        PRIMARY KEY (user_id, character_id)
    )
    "#,
];

/// Create the five tables if missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
