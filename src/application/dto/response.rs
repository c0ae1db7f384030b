//! Response DTOs
//!
//! Data structures for API response bodies. Identifiers are canonical UUID
//! strings and timestamps are RFC 3339.

use serde::{Deserialize, Serialize};

use crate::domain::{Chirp, User};

/// User response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
            email: user.email,
        }
    }
}

/// Chirp response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChirpResponse {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub body: String,
    pub user_id: String,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id.to_string(),
            created_at: chirp.created_at.to_rfc3339(),
            updated_at: chirp.updated_at.to_rfc3339(),
            body: chirp.body,
            user_id: chirp.user_id.to_string(),
        }
    }
}

/// Validate chirp response
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidChirpResponse {
    pub valid: bool,
}
