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

//! UI Layer - GTK4 user interface (View + Controller)
//!
//! # Structure
//!
//! - `app.rs` - GTK4 Application wrapper and window assembly
//! - `controller.rs` - MVC Controller (GTK-free, headless-testable)
//! - `timers.rs` - Tracked timer scheduling with teardown
//! - `builders/` - Page construction and event wiring
//! - `components/` - Reusable page components

pub mod app;
pub mod builders;
pub mod components;
pub mod controller;
pub mod timers;

pub use app::App;
pub use controller::Controller;

#[cfg(test)]
mod tests;
