//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a registered user.
///
/// Maps to the `users` table:
/// - id: UUID PRIMARY KEY
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
/// - email: TEXT NOT NULL UNIQUE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-generated identifier
    pub id: Uuid,

    /// Email address (unique)
    pub email: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for User data access operations.
///
/// The store generates identifiers and timestamps and enforces email
/// uniqueness.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user with the given email.
    async fn create(&self, email: &str) -> Result<User, AppError>;

    /// Delete every user, returning how many rows were removed.
    /// Chirps owned by the removed users are deleted with them.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
