//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::domain::{ChirpRepository, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{MemoryRepository, PgChirpRepository, PgUserRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::logging;
use crate::shared::hit_counter::HitCounter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub chirps: Arc<dyn ChirpRepository>,
    pub hits: Arc<HitCounter>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by a single in-memory store
    pub fn in_memory(store: Arc<MemoryRepository>, settings: Settings) -> Self {
        Self {
            users: store.clone(),
            chirps: store,
            hits: Arc::new(HitCounter::new()),
            settings: Arc::new(settings),
        }
    }
}

/// Build the full router with middleware for the given state
pub fn build_router(state: AppState) -> Router {
    routes::create_router(state).layer(logging::create_trace_layer())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = match settings.database.url.as_deref() {
            Some(url) => {
                let pool = database::create_pool(&settings.database, url).await?;
                tracing::info!("Database connection pool created");

                AppState {
                    users: Arc::new(PgUserRepository::new(pool.clone())),
                    chirps: Arc::new(PgChirpRepository::new(pool)),
                    hits: Arc::new(HitCounter::new()),
                    settings: Arc::new(settings.clone()),
                }
            }
            None => {
                tracing::warn!("No database URL configured, using in-memory store");
                AppState::in_memory(Arc::new(MemoryRepository::new()), settings.clone())
            }
        };

        if state.settings.is_dev_platform() {
            tracing::warn!("Running on dev platform, /admin/reset is enabled");
        }

        let router = build_router(state);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives, then drain in-flight requests
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
