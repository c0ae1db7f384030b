//! # Chirpy
//!
//! Application entry point. Initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Store (PostgreSQL pool, or in-memory when no URL is set)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chirpy::config::Settings;
use chirpy::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    chirpy::telemetry::init_tracing();

    info!("Starting Chirpy...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        platform = %settings.platform,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
