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

use crate::core::phone::{format_phone, strip_digits, MAX_PHONE_DIGITS};

#[test]
fn test_full_mobile_number() {
    assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
}

#[test]
fn test_partial_numbers() {
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("1"), "(1");
    assert_eq!(format_phone("11"), "(11");
    assert_eq!(format_phone("119"), "(11) 9");
    assert_eq!(format_phone("119876"), "(11) 9876");
    assert_eq!(format_phone("1198765"), "(11) 98765");
    assert_eq!(format_phone("11987654"), "(11) 98765-4");
}

#[test]
fn test_non_digits_are_stripped_before_masking() {
    assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
    assert_eq!(format_phone("11 9876 5-4321"), "(11) 98765-4321");
    assert_eq!(format_phone("abc11def9"), "(11) 9");
}

#[test]
fn test_digit_cap_is_enforced() {
    // Typing past 11 digits never extends the mask
    assert_eq!(format_phone("119876543210000"), "(11) 98765-4321");
    assert_eq!(strip_digits("119876543210000").len(), MAX_PHONE_DIGITS);
}

#[test]
fn test_mask_is_recomputed_not_patched() {
    // Re-masking already masked input is a fixpoint, so paste/delete can
    // never stack punctuation
    let once = format_phone("11987654321");
    assert_eq!(format_phone(&once), once);

    let partial = format_phone("119");
    assert_eq!(format_phone(&partial), partial);
}
