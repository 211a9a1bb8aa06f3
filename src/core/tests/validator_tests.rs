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

use crate::core::types::{ContactSubmission, Field, ValidationError};
use crate::core::validator::{
    validate_email, validate_message, validate_name, validate_phone, validate_subject,
    validate_submission,
};

/// Helper: a submission that passes every rule
fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: Some("(11) 98765-4321".to_string()),
        subject: "Consultation".to_string(),
        message: "I'd like to schedule an initial consultation.".to_string(),
    }
}

#[test]
fn test_valid_submission_passes() {
    let report = validate_submission(&valid_submission());
    assert!(report.is_valid(), "Fully filled submission should validate");
    assert!(report.first_error().is_none());
}

#[test]
fn test_name_too_short() {
    assert_eq!(validate_name("Jo"), Err(ValidationError::NameTooShort));
    assert_eq!(validate_name(""), Err(ValidationError::NameTooShort));
    // Whitespace padding doesn't help
    assert_eq!(validate_name("  a  "), Err(ValidationError::NameTooShort));
    assert!(validate_name("Ana").is_ok());
}

#[test]
fn test_short_name_is_reported_first() {
    let mut submission = valid_submission();
    submission.name = "Jo".to_string();

    let report = validate_submission(&submission);
    assert!(!report.is_valid());
    assert_eq!(
        report.first_error(),
        Some(&ValidationError::NameTooShort),
        "Name error must be surfaced before any other field's"
    );
}

#[test]
fn test_email_shapes() {
    assert!(validate_email("jane@example.com").is_ok());
    assert!(validate_email("a@b.co").is_ok());

    assert_eq!(validate_email("bad"), Err(ValidationError::InvalidEmail));
    assert_eq!(
        validate_email("no-dot@domain"),
        Err(ValidationError::InvalidEmail),
        "Domain must contain at least one dot"
    );
    assert_eq!(
        validate_email("spa ce@example.com"),
        Err(ValidationError::InvalidEmail)
    );
    assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
    assert_eq!(validate_email("jane@"), Err(ValidationError::InvalidEmail));
}

#[test]
fn test_phone_is_optional() {
    assert!(validate_phone(None).is_ok());
    assert!(validate_phone(Some("")).is_ok(), "Empty phone counts as absent");
}

#[test]
fn test_phone_needs_ten_digits_when_present() {
    assert_eq!(
        validate_phone(Some("119876")),
        Err(ValidationError::InvalidPhone)
    );
    assert!(validate_phone(Some("1198765432")).is_ok());
    // Punctuation is stripped before counting
    assert!(validate_phone(Some("(11) 98765-4321")).is_ok());
}

#[test]
fn test_subject_must_be_selected() {
    assert_eq!(validate_subject(""), Err(ValidationError::MissingSubject));
    assert!(validate_subject("Consultation").is_ok());
}

#[test]
fn test_message_too_short() {
    assert_eq!(validate_message("hi"), Err(ValidationError::MessageTooShort));
    assert_eq!(
        validate_message("         "),
        Err(ValidationError::MessageTooShort)
    );
    assert!(validate_message("A proper message.").is_ok());
}

#[test]
fn test_errors_collected_in_field_order() {
    let submission = ContactSubmission {
        name: "Jo".to_string(),
        email: "bad".to_string(),
        phone: None,
        subject: String::new(),
        message: "hi".to_string(),
    };

    let report = validate_submission(&submission);
    assert!(!report.is_valid());

    let fields: Vec<Field> = report.errors.iter().map(|e| e.field()).collect();
    assert_eq!(
        fields,
        vec![Field::Name, Field::Email, Field::Subject, Field::Message],
        "Errors must appear in field order, phone skipped when absent"
    );
}

#[test]
fn test_error_messages_are_user_facing() {
    assert_eq!(
        ValidationError::NameTooShort.to_string(),
        "Please enter your full name (at least 3 characters)."
    );
    assert_eq!(
        ValidationError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
}
