use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character as read through its planet join.
///
/// `homeworld` is the owning planet's name, resolved at query time with an
/// INNER JOIN on `planets`; the raw `planet_id` foreign key is never exposed.
/// A character whose planet no longer resolves does not appear in reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub hair_color: String,
    pub eye_color: String,
    pub gender: String,
    pub description: String,
    pub homeworld: String,
}
