//! # Domain Layer
//!
//! Core entities of the service and the repository traits that define how
//! they are stored. Independent of any framework or storage backend.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
