use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Join row linking a user to a favorite planet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoritePlanet {
    pub user_id: i64,
    pub planet_id: i64,
}

/// Join row linking a user to a favorite character.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoriteCharacter {
    pub user_id: i64,
    pub character_id: i64,
}
