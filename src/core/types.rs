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

//! src/core/types.rs
//!
//! Core type definitions for the portfolio page
//!
//! This module defines the fundamental types used throughout the application:
//! - `ContactSubmission`: the contact form payload
//! - `Field` / `ValidationError` / `ValidationReport`: validation results
//! - `ToastKind`: notification severity levels
//! - `NavState`: transient navigation state (menu, header, active section)
//! - `SectionSpan`: vertical geometry of one page section
//!
//! All types are plain data with no GTK dependency so the business logic
//! can be tested without a display server.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A contact form submission
///
/// `name`, `email`, `subject` and `message` are required and must pass
/// validation before a submission is accepted. `phone` is optional, but
/// when present it must contain at least 10 digits.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContactSubmission {
    /// Sender name (trimmed length >= 3)
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Optional phone number (>= 10 digits when present)
    pub phone: Option<String>,
    /// Selected subject (non-empty)
    pub subject: String,
    /// Message body (trimmed length >= 10)
    pub message: String,
}

/// Form fields, in the order they are validated and reported
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Phone => write!(f, "phone"),
            Field::Subject => write!(f, "subject"),
            Field::Message => write!(f, "message"),
        }
    }
}

/// Validation failures, one variant per field rule
///
/// The `Display` text is the user-facing message shown in the error toast,
/// so it is phrased as guidance rather than as a diagnostic.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Name missing or shorter than 3 characters after trimming
    #[error("Please enter your full name (at least 3 characters).")]
    NameTooShort,

    /// Email does not match the `local@domain.tld` pattern
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Phone was provided but contains fewer than 10 digits
    #[error("Please enter a valid phone number.")]
    InvalidPhone,

    /// No subject selected
    #[error("Please select a subject.")]
    MissingSubject,

    /// Message missing or shorter than 10 characters after trimming
    #[error("Please write a more detailed message (at least 10 characters).")]
    MessageTooShort,
}

impl ValidationError {
    /// Returns the field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameTooShort => Field::Name,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::InvalidPhone => Field::Phone,
            ValidationError::MissingSubject => Field::Subject,
            ValidationError::MessageTooShort => Field::Message,
        }
    }
}

/// Result of validating one submission
///
/// Created per submit attempt and discarded after use. Errors are kept in
/// field order; only the first one is surfaced to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    /// Failures in field order (name, email, phone, subject, message)
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// True when no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first failure in field order, if any
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }
}

/// Toast notification severity
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// CSS class applied to the toast widget
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }

    /// Glyph shown before the message
    pub fn glyph(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Warning => write!(f, "warning"),
            ToastKind::Info => write!(f, "info"),
        }
    }
}

/// Transient navigation state, derived from scroll position and user
/// interaction. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    /// Whether the slide-in menu is open
    pub menu_open: bool,
    /// Section currently highlighted in the nav links
    pub active_section_id: Option<String>,
    /// Whether the header carries the "scrolled" styling
    pub header_scrolled: bool,
}

/// Vertical geometry of one page section, in page coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    /// Section identifier matching its nav link
    pub id: String,
    /// Offset of the section top from the top of the page content
    pub top: f64,
    /// Section height
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}
