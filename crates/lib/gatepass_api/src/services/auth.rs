//! Authentication service — login/register flows delegating to
//! `gatepass_core::auth`.

use gatepass_core::auth::{jwt, password, queries};
use sqlx::PgPool;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{LoginResponse, RegisterResponse};

/// Roles the backend accepts at login/registration.
const KNOWN_ROLES: &[&str] = &["student", "faculty", "hod", "security"];

fn validate_role(role: &str) -> AppResult<()> {
    if KNOWN_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("unknown role '{role}'")))
    }
}

/// Authenticate with role + campus login id + password.
pub async fn login(
    pool: &PgPool,
    role: &str,
    login_id: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    validate_role(role)?;

    let Some((user, pw_hash)) = queries::find_user(pool, login_id, role).await? else {
        // Same error for unknown user and wrong password.
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    };

    if !password::verify_password(password, &pw_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let token = jwt::generate_access_token(user.id, role, jwt_secret)?;

    info!(user_id = user.id, role, "user logged in");
    Ok(LoginResponse {
        token,
        user_id: user.id,
        name: user.name,
        role: user.role,
    })
}

/// Register a new account for a role.
pub async fn register(
    pool: &PgPool,
    name: &str,
    login_id: &str,
    password: &str,
    role: &str,
) -> AppResult<RegisterResponse> {
    validate_role(role)?;
    if name.trim().is_empty() || login_id.trim().is_empty() {
        return Err(AppError::Validation("name and user_id are required".into()));
    }
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }

    if queries::user_exists(pool, login_id, role).await? {
        return Err(AppError::Conflict("User already exists".into()));
    }

    let pw_hash = password::hash_password(password)?;
    let user_id = queries::create_user(pool, name, login_id, &pw_hash, role).await?;

    info!(user_id, role, "user registered");
    Ok(RegisterResponse {
        id: user_id,
        message: "User registered successfully".into(),
    })
}
