use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,                      // unique user ID
    pub name: String,
    pub email: String,                 // login key, unique
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,         // Argon2 hash, not exposed in JSON
    pub profile_image: Option<String>,
    pub age: Option<f64>,
    pub xp: f64,                       // experience points, defaults to 0
    pub created_at: OffsetDateTime,
}
