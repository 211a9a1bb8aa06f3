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

//! Brazilian phone number input mask
//!
//! The mask is recomputed from the raw digit string on every keystroke
//! rather than patched incrementally, so pasting or deleting in the middle
//! of the entry never produces a malformed value.

/// Maximum number of digits in a masked phone number (2-digit area code
/// plus a 9-digit mobile number)
pub const MAX_PHONE_DIGITS: usize = 11;

/// Strips everything that is not an ASCII digit and caps the result at
/// [`MAX_PHONE_DIGITS`]
pub fn strip_digits(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Formats a phone number progressively as digits accumulate
///
/// - empty input → `""`
/// - up to 2 digits → `(D`
/// - up to 7 digits → `(DD) DDDDD`
/// - more → `(DD) DDDDD-DDDD`
///
/// Input is sanitised first, so interspersed punctuation is ignored and
/// digits beyond the cap are discarded.
///
/// # Example
///
/// ```
/// use folio_shell::core::phone::format_phone;
///
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_phone("119876"), "(11) 9876");
/// assert_eq!(format_phone(""), "");
/// ```
pub fn format_phone(input: &str) -> String {
    let digits = strip_digits(input);

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}
