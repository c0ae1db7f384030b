//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: User registration
//! - **ChirpService**: Chirp validation, creation and lookup
//! - **AdminService**: Visit metrics and development reset
//! - **auth_service**: Password hashing helpers

pub mod admin_service;
pub mod auth_service;
pub mod chirp_service;
pub mod user_service;

pub use admin_service::{AdminError, AdminService, AdminServiceImpl};
pub use auth_service::{check_password_hash, hash_password, AuthError};
pub use chirp_service::{ChirpError, ChirpService, ChirpServiceImpl};
pub use user_service::{UserError, UserService, UserServiceImpl};
