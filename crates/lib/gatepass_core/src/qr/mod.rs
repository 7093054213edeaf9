//! QR token service: minting, payload grammar, verification.

pub mod artifact;
pub mod payload;
pub mod service;

use thiserror::Error;

/// QR service errors.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Artifact store error: {0}")]
    Artifact(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}
