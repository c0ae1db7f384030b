//! Chirp entity and repository trait.
//!
//! Maps to the `chirps` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Maximum chirp body length in UTF-8 bytes.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// A short text post owned by a user.
///
/// Maps to the `chirps` table:
/// - id: UUID PRIMARY KEY
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
/// - body: TEXT NOT NULL
/// - user_id: UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,
    pub body: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for Chirp data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Insert a chirp. Fails if `user_id` does not reference an existing user.
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, AppError>;

    /// All chirps, oldest first.
    async fn list(&self) -> Result<Vec<Chirp>, AppError>;

    /// Find a chirp by its ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, AppError>;
}
