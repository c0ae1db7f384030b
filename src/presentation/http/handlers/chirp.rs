//! Chirp Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::dto::request::{CreateChirpRequest, ValidateChirpRequest};
use crate::application::dto::response::{ChirpResponse, ValidChirpResponse};
use crate::application::services::{ChirpError, ChirpService, ChirpServiceImpl};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::shared::validation;
use crate::startup::AppState;

impl From<ChirpError> for AppError {
    fn from(e: ChirpError) -> Self {
        match e {
            ChirpError::Validation(kind) => AppError::Validation(kind),
            ChirpError::NotFound => AppError::NotFound("Chirp not found".into()),
            ChirpError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Create a chirp
pub async fn create_chirp(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>), AppError> {
    let chirp_service = ChirpServiceImpl::new(state.chirps.clone());

    let chirp = chirp_service.create_chirp(&body.body, &body.user_id).await?;

    Ok((StatusCode::CREATED, Json(ChirpResponse::from(chirp))))
}

/// List all chirps
pub async fn list_chirps(State(state): State<AppState>) -> Result<Json<Vec<ChirpResponse>>, AppError> {
    let chirp_service = ChirpServiceImpl::new(state.chirps.clone());

    let chirps = chirp_service.list_chirps().await?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

/// Get chirp by ID
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>, AppError> {
    let chirp_id = Uuid::parse_str(&chirp_id)
        .map_err(|_| AppError::BadRequest("Invalid chirp_id".into()))?;

    let chirp_service = ChirpServiceImpl::new(state.chirps.clone());
    let chirp = chirp_service.get_chirp(chirp_id).await?;

    Ok(Json(ChirpResponse::from(chirp)))
}

/// Check a chirp body without storing it
pub async fn validate_chirp(
    JsonBody(body): JsonBody<ValidateChirpRequest>,
) -> Result<Json<ValidChirpResponse>, AppError> {
    validation::validate_chirp_body(&body.body)?;

    Ok(Json(ValidChirpResponse { valid: true }))
}
