//! QR binding domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The durable association between a request and an opaque verification
/// token, as stored in `qr_codes`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct QrBinding {
    pub id: i64,
    pub request_id: i64,
    pub qr_token: String,
    pub qr_path: String,
    pub scanned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

