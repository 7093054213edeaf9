//! API server configuration.

use gatepass_core::auth::jwt::resolve_jwt_secret;

/// Configuration for the API server. Built once at startup and carried
/// through `AppState`; nothing reads the environment after this.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3200").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Directory where QR artifacts are stored.
    pub qr_dir: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable       | Default                               |
    /// |----------------|---------------------------------------|
    /// | `BIND_ADDR`    | `127.0.0.1:3200`                      |
    /// | `DATABASE_URL` | `postgres://localhost:5432/gatepass`  |
    /// | `JWT_SECRET`   | generated & persisted to file         |
    /// | `QR_DIR`       | `static/qr_codes`                     |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3200".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/gatepass".into()),
            jwt_secret: resolve_jwt_secret(),
            qr_dir: std::env::var("QR_DIR").unwrap_or_else(|_| "static/qr_codes".into()),
        }
    }
}
