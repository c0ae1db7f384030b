//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! - **PgUserRepository** / **PgChirpRepository**: PostgreSQL via sqlx
//! - **MemoryRepository**: process-local store implementing both traits
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgChirpRepository, PgUserRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let chirp_repo = PgChirpRepository::new(pool);
//! }
//! ```

pub mod chirp_repository;
pub mod memory_repository;
pub mod user_repository;

pub use chirp_repository::PgChirpRepository;
pub use memory_repository::MemoryRepository;
pub use user_repository::PgUserRepository;
