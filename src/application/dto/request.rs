//! Request DTOs
//!
//! Data structures for API request bodies. A missing field is a decode
//! error, not a validation error.

use serde::Deserialize;

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
}

/// Create chirp request. `user_id` stays textual so a malformed id can be
/// reported as its own validation error.
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: String,
}

/// Validate chirp request
#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}
