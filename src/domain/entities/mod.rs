//! # Domain Entities
//!
//! Core domain entities. Both map directly to their database tables.
//!
//! - **User**: a registered account identified by email
//! - **Chirp**: a short post owned by a user
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod chirp;
mod user;

pub use chirp::{Chirp, ChirpRepository, MAX_CHIRP_LENGTH};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use chirp::MockChirpRepository;
#[cfg(test)]
pub use user::MockUserRepository;
