//! UI module tests
//!
//! Controller tests run headless; widget construction itself is exercised
//! through the running application, not under `cargo test`.

#[cfg(test)]
mod controller_tests;
