//! Route Configuration
//!
//! Configures all HTTP routes for the service.

use axum::{
    http::header,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{count_hits, track_http_metrics};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .merge(file_routes(state.clone()))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(track_http_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let metrics = metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        metrics,
    ))
}

/// JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .route("/validate_chirp", post(handlers::chirp::validate_chirp))
        .route("/users", post(handlers::user::create_user))
        .route(
            "/chirps",
            get(handlers::chirp::list_chirps).post(handlers::chirp::create_chirp),
        )
        .route("/chirps/{chirp_id}", get(handlers::chirp::get_chirp))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(handlers::admin::metrics))
        .route("/reset", post(handlers::admin::reset))
}

/// Static file routes. Only `/app` counts towards the visit metrics.
fn file_routes(state: AppState) -> Router<AppState> {
    let fileserver = &state.settings.fileserver;

    let app = Router::new()
        .nest_service("/app", ServeDir::new(&fileserver.app_root))
        .layer(middleware::from_fn_with_state(state.clone(), count_hits));

    Router::new()
        .merge(app)
        .nest_service("/assets", ServeDir::new(&fileserver.assets_dir))
}
