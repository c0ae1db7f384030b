//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod hit_counter;
pub mod validation;
