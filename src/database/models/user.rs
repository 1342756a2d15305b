use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Character, Planet};

/// A user row. `password` holds a bcrypt hash, never plaintext.
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// Plain serialization mode: id, name, email, password (hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

/// Extended serialization mode: the user with favorites nested as lists,
/// each entry serialized the same way its own endpoints serialize it.
#[derive(Debug, Clone, Serialize)]
pub struct UserFavoritesResponse {
    pub id: i64,
    pub name: String,
    pub favorites_planets: Vec<Planet>,
    pub favorites_characters: Vec<Character>,
}

impl UserFavoritesResponse {
    pub fn new(user: User, planets: Vec<Planet>, characters: Vec<Character>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            favorites_planets: planets,
            favorites_characters: characters,
        }
    }
}
