//! Store module tests
//!
//! Contains test suites for the data access layer:
//! - Business rule tests over the in-memory document
//! - JSON store persistence, backup and restore tests
//! - Settings round-trip tests

#[cfg(test)]
mod json_store_tests;
#[cfg(test)]
mod settings_tests;
