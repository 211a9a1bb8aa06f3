// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and algorithms behind the
//! page's behaviour:
//! - Type definitions for submissions, validation and navigation state
//! - Field validation strategies for the contact form
//! - Phone number input mask
//! - Scroll-derived state (header, back-to-top, active section)
//! - Stats counter interpolation
//! - Draft message file parsing
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod counter;
pub mod parser;
pub mod phone;
pub mod scroll;
pub mod types;
pub mod validator;

pub use counter::{StatFormat, StatTarget};
pub use phone::format_phone;
pub use types::*;
pub use validator::validate_submission;

#[cfg(test)]
mod tests;
