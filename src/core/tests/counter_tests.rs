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

use crate::core::counter::{StatFormat, StatTarget, COUNTER_STEPS};

#[test]
fn test_parse_percent() {
    let target = StatTarget::parse("100%");
    assert_eq!(target.end, 100);
    assert_eq!(target.format, StatFormat::Percent);
}

#[test]
fn test_parse_plus() {
    let target = StatTarget::parse("+500");
    assert_eq!(target.end, 500);
    assert_eq!(target.format, StatFormat::Plus);

    // Trailing marker works too
    let target = StatTarget::parse("250+");
    assert_eq!(target.end, 250);
    assert_eq!(target.format, StatFormat::Plus);
}

#[test]
fn test_parse_hours() {
    let target = StatTarget::parse("24h");
    assert_eq!(target.end, 24);
    assert_eq!(target.format, StatFormat::Hours);
}

#[test]
fn test_parse_plain_integer() {
    let target = StatTarget::parse("15");
    assert_eq!(target.end, 15);
    assert_eq!(target.format, StatFormat::Plain);
}

#[test]
fn test_parse_fallbacks_without_digits() {
    assert_eq!(StatTarget::parse("%").end, 100);
    assert_eq!(StatTarget::parse("+").end, 500);
    assert_eq!(StatTarget::parse("h").end, 24);
    assert_eq!(StatTarget::parse("").end, 100);
}

#[test]
fn test_animation_starts_at_zero_and_ends_exactly_on_target() {
    let target = StatTarget::parse("100%");

    assert_eq!(target.value_at_step(0), 0);
    assert_eq!(target.value_at_step(COUNTER_STEPS), 100);
    // Overshooting the step count stays pinned to the target
    assert_eq!(target.value_at_step(COUNTER_STEPS + 5), 100);
}

#[test]
fn test_animation_is_monotonic_over_sixty_steps() {
    let target = StatTarget::parse("+500");

    let mut last = -1;
    for step in 0..=COUNTER_STEPS {
        let value = target.value_at_step(step);
        assert!(value >= last, "Counter must never tick backwards");
        assert!(value <= target.end);
        last = value;
    }
    assert_eq!(last, 500, "Final step must land exactly on the target");
}

#[test]
fn test_formatting_keeps_marker() {
    assert_eq!(StatTarget::parse("100%").format_value(42), "42%");
    assert_eq!(StatTarget::parse("+500").format_value(42), "+42");
    assert_eq!(StatTarget::parse("24h").format_value(7), "7h");
    assert_eq!(StatTarget::parse("15").format_value(7), "7");
}

#[test]
fn test_percent_animation_frame_sequence() {
    // An element displaying "100%" animates 0% → 100% inclusive in exactly
    // 60 steps
    let target = StatTarget::parse("100%");

    let frames: Vec<String> = (0..=COUNTER_STEPS)
        .map(|s| target.format_value(target.value_at_step(s)))
        .collect();

    assert_eq!(frames.len() as u32, COUNTER_STEPS + 1);
    assert_eq!(frames.first().map(String::as_str), Some("0%"));
    assert_eq!(frames.last().map(String::as_str), Some("100%"));
}
