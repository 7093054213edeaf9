//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::User;

/// Fetch a user by campus login id and role, returning the user plus
/// their password hash.
pub async fn find_user(
    pool: &PgPool,
    login_id: &str,
    role: &str,
) -> Result<Option<(User, String)>, AuthError> {
    let row = sqlx::query_as::<_, (i64, String, String)>(
        "SELECT id, name, password_hash FROM users WHERE login_id = $1 AND role = $2",
    )
    .bind(login_id)
    .bind(role)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(id, name, password_hash)| {
        (
            User {
                id,
                name,
                login_id: login_id.to_string(),
                role: role.to_string(),
            },
            password_hash,
        )
    }))
}

/// Check whether a login id is already registered for a role.
pub async fn user_exists(pool: &PgPool, login_id: &str, role: &str) -> Result<bool, AuthError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE login_id = $1 AND role = $2)",
    )
    .bind(login_id)
    .bind(role)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Create a new user account, returning its id.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    login_id: &str,
    password_hash: &str,
    role: &str,
) -> Result<i64, AuthError> {
    let user_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, login_id, password_hash, role) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(login_id)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;
    Ok(user_id)
}
