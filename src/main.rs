use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use agency_console_api::config::AppConfig;
use agency_console_api::database::{DatabaseManager, PgAdminStore};
use agency_console_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Agency Console API in {:?} mode", config.environment);
    if config.security.jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET is not set; logins will fail and every request is anonymous");
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    DatabaseManager::ensure_schema(&pool)
        .await
        .context("failed to prepare admins table")?;

    let bind_addr = config.bind_addr();
    let state = AppState::new(config, Arc::new(PgAdminStore::new(pool)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Agency Console API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}
