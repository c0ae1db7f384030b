//! HTTP Presentation
//!
//! Routes, handlers and extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
