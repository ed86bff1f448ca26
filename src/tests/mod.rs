//! Crate-internal test suites.
//!
//! - `common`: shared fixtures and stub record sources
//! - `property`: proptest invariants for search and birthday formatting
//! - `unit`: table-driven paginator tests (rstest)
//! - `integration`: HTTP client against a wiremock server

pub mod common;
mod integration;
mod unit;
