//! Common Test Utilities
//!
//! Record builders, a canned randomuser.me payload, and in-memory
//! `EmployeeSource` implementations.

pub mod fixtures;

pub use fixtures::*;
