use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::User;

pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password_hash: &'a str,
    pub profile_image: Option<&'a str>,
    pub age: Option<f64>,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, password_hash, profile_image, age, xp, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, password_hash, profile_image, age, xp, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user. The unique constraint on email is the sole arbiter
    /// of duplicates; callers check [`is_unique_violation`] on failure.
    pub async fn create(db: &PgPool, new: NewUser<'_>) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, phone, password_hash, profile_image, age)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, password_hash, profile_image, age, xp, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.phone)
        .bind(new.password_hash)
        .bind(new.profile_image)
        .bind(new.age)
        .fetch_one(db)
        .await
    }

    /// Update profile fields by id, returning the fresh row. `None` means the
    /// record no longer exists.
    pub async fn update_profile(
        db: &PgPool,
        id: Uuid,
        name: &str,
        phone: &str,
        age: Option<f64>,
        profile_image: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, phone = $3, age = $4, profile_image = $5
            WHERE id = $1
            RETURNING id, name, email, phone, password_hash, profile_image, age, xp, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(phone)
        .bind(age)
        .bind(profile_image)
        .fetch_optional(db)
        .await
    }
}

/// True when the error is the database rejecting a duplicate key.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
