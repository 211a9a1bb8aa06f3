//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Field validation tests
//! - Phone mask tests
//! - Scroll state tests
//! - Stats counter tests
//! - Draft parser tests

#[cfg(test)]
mod counter_tests;
#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod phone_tests;
#[cfg(test)]
mod scroll_tests;
#[cfg(test)]
mod validator_tests;
