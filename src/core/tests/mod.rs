//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Responsive manager tests (classification, hysteresis, observers)
//! - Layout helper tests (fonts, columns, dialog sizing)
//! - Validator tests

#[cfg(test)]
mod layout_tests;
#[cfg(test)]
mod responsive_tests;
#[cfg(test)]
mod validator_tests;
