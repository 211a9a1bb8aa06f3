//! Config module tests
//!
//! Consent flag persistence tests on temporary directories.

#[cfg(test)]
mod consent_tests;
