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

use crate::core::parser::{parse_draft, ParseError};

#[test]
fn test_parse_complete_draft() {
    let draft = r#"
# consultation request
name: Jane Doe
email: jane@example.com
phone: (11) 98765-4321
subject: Consultation
message: I'd like to schedule an initial consultation.
"#;

    let submission = parse_draft(draft).unwrap();
    assert_eq!(submission.name, "Jane Doe");
    assert_eq!(submission.email, "jane@example.com");
    assert_eq!(submission.phone.as_deref(), Some("(11) 98765-4321"));
    assert_eq!(submission.subject, "Consultation");
    assert_eq!(
        submission.message,
        "I'd like to schedule an initial consultation."
    );
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let draft = "# header\n\nname: Jane Doe\n   \n# trailing\n";
    let submission = parse_draft(draft).unwrap();
    assert_eq!(submission.name, "Jane Doe");
}

#[test]
fn test_missing_fields_stay_empty_for_the_validator() {
    let submission = parse_draft("name: Jane Doe\n").unwrap();
    assert!(submission.email.is_empty());
    assert!(submission.subject.is_empty());
    assert!(submission.message.is_empty());
    assert!(submission.phone.is_none(), "Absent phone parses as None");
}

#[test]
fn test_empty_phone_value_is_none() {
    let submission = parse_draft("phone:\n").unwrap();
    assert!(submission.phone.is_none());
}

#[test]
fn test_field_names_are_case_insensitive() {
    let submission = parse_draft("Name: Jane Doe\nEMAIL: jane@example.com\n").unwrap();
    assert_eq!(submission.name, "Jane Doe");
    assert_eq!(submission.email, "jane@example.com");
}

#[test]
fn test_unknown_field_reports_line_number() {
    let err = parse_draft("name: Jane\nnickname: JD\n").unwrap_err();
    match err {
        ParseError::UnknownField { field, line } => {
            assert_eq!(field, "nickname");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UnknownField, got {other:?}"),
    }
}

#[test]
fn test_malformed_line_reports_line_number() {
    let err = parse_draft("name Jane Doe\n").unwrap_err();
    match err {
        ParseError::InvalidSyntax { line, .. } => assert_eq!(line, 1),
        other => panic!("Expected InvalidSyntax, got {other:?}"),
    }
}

#[test]
fn test_value_may_contain_colons() {
    let submission = parse_draft("message: note: please call after 18:00 today ok\n").unwrap();
    assert_eq!(submission.message, "note: please call after 18:00 today ok");
}
