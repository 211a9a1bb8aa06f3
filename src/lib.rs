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

//! Folio Shell
//!
//! A one-page studio portfolio as a GTK4 desktop application: scrollable
//! sections with a floating header, a validated contact form, toast
//! notifications, animated stats and a cookie-consent banner.
//!
//! # Features
//!
//! - **Contact Form:** Field validation with user-facing messages and a
//!   live phone input mask
//! - **Navigation:** Smooth scrolling, active-section highlighting and a
//!   slide-in menu with scrim
//! - **Toasts:** Stacked transient notifications with auto-dismiss
//! - **Stats Counters:** Count-up animation triggered on first visibility
//! - **Consent Banner:** Persisted acceptance via atomic file writes
//! - **Clean Teardown:** Every scheduled timer is cancelled on close
//!
//! # Architecture
//!
//! - **`core`:** Business logic (validation, phone mask, scroll maths,
//!   counters, draft parsing)
//! - **`config`:** File operations (cookie-consent flag, atomic writes)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Validating a submission
//!
//! ```
//! use folio_shell::core::types::ContactSubmission;
//! use folio_shell::core::validate_submission;
//!
//! let submission = ContactSubmission {
//!     name: "Jane Doe".to_string(),
//!     email: "jane@example.com".to_string(),
//!     phone: None,
//!     subject: "Consultation".to_string(),
//!     message: "I'd like to schedule an initial consultation.".to_string(),
//! };
//!
//! assert!(validate_submission(&submission).is_valid());
//! ```
//!
//! ## Masking a phone number
//!
//! ```
//! use folio_shell::core::format_phone;
//!
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use folio_shell::ui::App;
//! use std::path::PathBuf;
//!
//! let app = App::new(PathBuf::from("/tmp/cookie-consent"))?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), String>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{ContactSubmission, Field, ToastKind, ValidationError, ValidationReport};
