//! Validation Utilities
//!
//! Pure checks applied to request payloads before any store access.

use uuid::Uuid;

use crate::domain::MAX_CHIRP_LENGTH;

/// Rejection reasons for client-supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Chirp cannot be empty")]
    EmptyBody,

    #[error("Chirp is too long")]
    TooLong,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid user_id")]
    InvalidUserId,
}

/// Classify a chirp body. Emptiness is checked before length.
///
/// Length is the UTF-8 byte length of the decoded string, so a multi-byte
/// character counts once per byte.
pub fn validate_chirp_body(body: &str) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    if body.len() > MAX_CHIRP_LENGTH {
        return Err(ValidationError::TooLong);
    }
    Ok(())
}

/// Reject an empty email. Format and uniqueness are left to the store.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    Ok(())
}

/// Parse a user identifier in any textual UUID form.
pub fn parse_user_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidUserId)
}
