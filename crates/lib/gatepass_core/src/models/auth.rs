//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// Domain user. `login_id` is the campus-issued identifier the user
/// types at login (roll number, staff id); `role` is one of
/// `student` / `faculty` / `hod` / `security`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub login_id: String,
    pub role: String,
}

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: i64,
    /// Role the user logged in as.
    pub role: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
