//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection pool (PostgreSQL)
//! - Repository implementations (PostgreSQL and in-memory)
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
