//! # gatepass_api
//!
//! HTTP API library for Gatepass.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use gatepass_core::qr::artifact::QrArtifactStore;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{approvals, auth, gate, passes, qr};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
    /// Store for scannable QR artifacts.
    pub qr_store: Arc<dyn QrArtifactStore>,
}

/// Run embedded database migrations.
///
/// Delegates to `gatepass_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    gatepass_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/register", post(auth::register_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route("/api/passes", get(passes::list_passes_handler))
        .route("/api/passes", post(passes::create_pass_handler))
        .route(
            "/api/students/{student_id}/passes",
            get(passes::student_passes_handler),
        )
        .route("/api/approvals/pending", get(approvals::pending_handler))
        .route("/api/approvals/decide", post(approvals::decide_handler))
        .route("/api/approvals/stats", get(approvals::stats_handler))
        .route("/api/qr/generate/{request_id}", post(qr::mint_handler))
        .route("/api/qr/verify", post(qr::verify_handler))
        .route("/api/gate/check", post(gate::check_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
