//! Chirp Service
//!
//! Validates and stores chirps, and reads them back.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpRepository};
use crate::shared::validation::{self, ValidationError};

/// Chirp service trait
#[async_trait]
pub trait ChirpService: Send + Sync {
    /// Validate a body and store it for the user identified by `user_id`.
    async fn create_chirp(&self, body: &str, user_id: &str) -> Result<Chirp, ChirpError>;

    /// All chirps, oldest first
    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpError>;

    /// A single chirp
    async fn get_chirp(&self, chirp_id: Uuid) -> Result<Chirp, ChirpError>;
}

/// Chirp service errors
#[derive(Debug, thiserror::Error)]
pub enum ChirpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Chirp not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ChirpService implementation
pub struct ChirpServiceImpl {
    chirp_repo: Arc<dyn ChirpRepository>,
}

impl ChirpServiceImpl {
    pub fn new(chirp_repo: Arc<dyn ChirpRepository>) -> Self {
        Self { chirp_repo }
    }
}

#[async_trait]
impl ChirpService for ChirpServiceImpl {
    async fn create_chirp(&self, body: &str, user_id: &str) -> Result<Chirp, ChirpError> {
        // Everything the client sent is checked before the store is touched
        validation::validate_chirp_body(body)?;
        let user_id = validation::parse_user_id(user_id)?;

        let chirp = self
            .chirp_repo
            .create(body, user_id)
            .await
            .map_err(|e| ChirpError::Internal(e.to_string()))?;

        tracing::debug!(chirp_id = %chirp.id, user_id = %user_id, "Chirp created");
        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, ChirpError> {
        self.chirp_repo
            .list()
            .await
            .map_err(|e| ChirpError::Internal(e.to_string()))
    }

    async fn get_chirp(&self, chirp_id: Uuid) -> Result<Chirp, ChirpError> {
        self.chirp_repo
            .find_by_id(chirp_id)
            .await
            .map_err(|e| ChirpError::Internal(e.to_string()))?
            .ok_or(ChirpError::NotFound)
    }
}
