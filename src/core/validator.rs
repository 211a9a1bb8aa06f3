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

//! Contact form field validation
//!
//! Each field has its own pure validation strategy returning
//! `Result<(), ValidationError>`. `validate_submission` runs the strategies
//! in field order and collects every failure, but the UI only surfaces the
//! first one per attempt.
//!
//! Validation never mutates the submission: a failed attempt leaves the
//! form exactly as the user typed it.

use regex::Regex;
use std::sync::OnceLock;

use crate::core::phone::strip_digits;
use crate::core::types::{ContactSubmission, ValidationError, ValidationReport};

/// Minimum trimmed length for the name field
pub const MIN_NAME_LEN: usize = 3;

/// Minimum trimmed length for the message field
pub const MIN_MESSAGE_LEN: usize = 10;

/// Minimum digit count for an optional phone number
pub const MIN_PHONE_DIGITS: usize = 10;

/// Email shape: something before `@`, something after, and at least one
/// `.` in the domain part. No whitespace anywhere.
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should be valid regex")
    })
}

/// Validates the name field (trimmed length >= 3)
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_NAME_LEN {
        Err(ValidationError::NameTooShort)
    } else {
        Ok(())
    }
}

/// Validates the email field against the `local@domain.tld` shape
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates an optional phone number
///
/// The field is optional; when a value is present it must contain at least
/// 10 digits after sanitisation.
pub fn validate_phone(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        None => Ok(()),
        Some(v) if v.is_empty() => Ok(()),
        Some(v) => {
            if strip_digits(v).chars().count() < MIN_PHONE_DIGITS {
                Err(ValidationError::InvalidPhone)
            } else {
                Ok(())
            }
        }
    }
}

/// Validates the subject field (non-empty)
pub fn validate_subject(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingSubject)
    } else {
        Ok(())
    }
}

/// Validates the message field (trimmed length >= 10)
pub fn validate_message(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_MESSAGE_LEN {
        Err(ValidationError::MessageTooShort)
    } else {
        Ok(())
    }
}

/// Validates a complete submission
///
/// Runs every field strategy in field order (name, email, phone, subject,
/// message) and collects the failures. The phone strategy is skipped when
/// the field is absent, matching its optional contract.
///
/// # Example
///
/// ```
/// use folio_shell::core::types::ContactSubmission;
/// use folio_shell::core::validator::validate_submission;
///
/// let draft = ContactSubmission {
///     name: "Jo".into(),
///     email: "bad".into(),
///     phone: None,
///     subject: String::new(),
///     message: "hi".into(),
/// };
///
/// let report = validate_submission(&draft);
/// assert!(!report.is_valid());
/// assert_eq!(report.errors.len(), 4);
/// ```
pub fn validate_submission(submission: &ContactSubmission) -> ValidationReport {
    let mut errors = Vec::new();

    if let Err(e) = validate_name(&submission.name) {
        errors.push(e);
    }
    if let Err(e) = validate_email(&submission.email) {
        errors.push(e);
    }
    if let Err(e) = validate_phone(submission.phone.as_deref()) {
        errors.push(e);
    }
    if let Err(e) = validate_subject(&submission.subject) {
        errors.push(e);
    }
    if let Err(e) = validate_message(&submission.message) {
        errors.push(e);
    }

    ValidationReport { errors }
}
