//! REST API endpoint tests

mod admin_tests;
mod chirp_tests;
