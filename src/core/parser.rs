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

//! src/core/parser.rs
//!
//! Draft contact-message file parser
//!
//! The `check` CLI subcommand validates a draft message written as a plain
//! text file, one `field: value` pair per line:
//!
//! ```text
//! # consultation request
//! name: Jane Doe
//! email: jane@example.com
//! phone: (11) 98765-4321
//! subject: Consultation
//! message: I'd like to schedule an initial consultation.
//! ```
//!
//! `#` comments and blank lines are skipped. Unknown fields and malformed
//! lines are reported with their line number. Missing fields are left
//! empty so the validator can report them instead of the parser.
//!
//! The parser uses nom combinators and only structures data - validation
//! happens in validator.rs afterwards.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::space0,
    combinator::rest,
    sequence::separated_pair,
    IResult, Parser,
};
use thiserror::Error;

use crate::core::types::ContactSubmission;

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Unknown field '{field}' on line {line}")]
    UnknownField { field: String, line: usize },

    #[error("IO error reading draft: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parses one `field: value` line into its name and raw value
fn field_line(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        take_while1(|c: char| c.is_ascii_alphabetic()),
        (space0, tag(":"), space0),
        rest,
    )
    .parse(input)
}

/// Parses a complete draft message file
///
/// # Arguments
/// * `content` - The full draft file content as a string
///
/// # Returns
/// A `ContactSubmission` with every recognised field filled in, or a
/// `ParseError` for the first malformed or unknown line.
///
/// # Example
/// ```
/// use folio_shell::core::parser::parse_draft;
///
/// let draft = "name: Jane Doe\nemail: jane@example.com\n";
/// let submission = parse_draft(draft).unwrap();
/// assert_eq!(submission.name, "Jane Doe");
/// ```
pub fn parse_draft(content: &str) -> Result<ContactSubmission, ParseError> {
    let mut submission = ContactSubmission::default();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let (field, value) = match field_line(line_trimmed) {
            Ok((_, pair)) => pair,
            Err(e) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{e:?}"),
                });
            }
        };

        let value = value.trim();

        match field.to_lowercase().as_str() {
            "name" => submission.name = value.to_string(),
            "email" => submission.email = value.to_string(),
            "phone" => {
                submission.phone = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "subject" => submission.subject = value.to_string(),
            "message" => submission.message = value.to_string(),
            other => {
                return Err(ParseError::UnknownField {
                    field: other.to_string(),
                    line: line_num,
                });
            }
        }
    }

    Ok(submission)
}
