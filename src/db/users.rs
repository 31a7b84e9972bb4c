use crate::error::AppError;
use crate::models::user::{NewUser, User};
use sqlx::SqlitePool;

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Inserts a user and returns the stored row. A taken email is reported as `Conflict`.
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<User, AppError> {
    let created = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password)
        VALUES (?, ?, ?)
        RETURNING id, name, email, password
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::from_insert(e, "Email already exists"))?;

    tracing::info!(user_id = created.id, "Created user");
    Ok(created)
}
