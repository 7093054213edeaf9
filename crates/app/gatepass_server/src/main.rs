//! Gatepass API server binary.
//!
//! Connects to PostgreSQL, runs migrations, and serves the REST API.

use std::sync::Arc;

use clap::Parser;
use gatepass_core::qr::artifact::PayloadFileStore;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server. Everything else (`BIND_ADDR`,
/// `DATABASE_URL`, `JWT_SECRET`, `QR_DIR`) comes from the environment via
/// `ApiConfig::from_env`.
#[derive(Parser, Debug)]
#[command(name = "gatepass_server", about = "Gatepass API server")]
struct Args {
    /// Maximum number of database connections in the pool.
    #[arg(long, env = "MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,gatepass_api=debug,gatepass_core=debug".parse().unwrap()
            }),
        )
        .init();

    let args = Args::parse();
    let config = gatepass_api::config::ApiConfig::from_env();

    info!(
        database_url = %config.pg_connection_url,
        bind_addr = %config.bind_addr,
        max_connections = args.max_connections,
        "starting gatepass_server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.pg_connection_url)
        .await?;

    info!("running database migrations");
    gatepass_api::migrate(&pool).await?;

    let state = gatepass_api::AppState {
        pool,
        qr_store: Arc::new(PayloadFileStore::new(config.qr_dir.clone())),
        config: config.clone(),
    };

    let app = gatepass_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
