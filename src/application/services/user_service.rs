//! User Service
//!
//! Handles user registration.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{User, UserRepository};
use crate::shared::validation::{self, ValidationError};

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user by email
    async fn create_user(&self, email: &str) -> Result<User, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// UserService implementation
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, email: &str) -> Result<User, UserError> {
        validation::validate_email(email)?;

        // Uniqueness is the store's constraint; a duplicate is an internal error
        let user = self
            .user_repo
            .create(email)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
