//! Admin Handlers
//!
//! Visit metrics page and the development-only reset.

use axum::{extract::State, response::Html};

use crate::application::services::{AdminError, AdminService, AdminServiceImpl};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn admin_service(state: &AppState) -> AdminServiceImpl {
    AdminServiceImpl::new(
        state.users.clone(),
        state.hits.clone(),
        state.settings.is_dev_platform(),
    )
}

/// Render the admin page with the current visit count
pub fn render_metrics_page(hits: i32) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>"#,
        hits
    )
}

/// Show file-server visit metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(render_metrics_page(admin_service(&state).hits()))
}

/// Wipe users, chirps and the visit counter (dev platform only)
pub async fn reset(State(state): State<AppState>) -> Result<&'static str, AppError> {
    admin_service(&state).reset().await.map_err(|e| match e {
        AdminError::NotDevPlatform => AppError::Forbidden(e.to_string()),
        AdminError::Internal(msg) => AppError::Internal(msg),
    })?;

    Ok("ok")
}
