//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::CreateUserRequest;
use crate::application::dto::response::UserResponse;
use crate::application::services::{UserError, UserService, UserServiceImpl};
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user_service = UserServiceImpl::new(state.users.clone());

    let user = user_service
        .create_user(&body.email)
        .await
        .map_err(|e| match e {
            UserError::Validation(kind) => AppError::Validation(kind),
            UserError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
