use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row; serializes directly as its API representation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub diameter: String,
    pub rotation_period: String,
    pub population: String,
    pub climate: String,
    pub terrain: String,
}
