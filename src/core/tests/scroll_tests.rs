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

use crate::core::scroll::{
    active_section, back_to_top_visible, ease_out_cubic, half_visible, header_scrolled,
    scroll_position_at, smooth_scroll_target,
};
use crate::core::types::SectionSpan;

/// Helper: a typical one-page layout (disjoint, contiguous sections)
fn page_sections() -> Vec<SectionSpan> {
    vec![
        SectionSpan::new("home", 0.0, 800.0),
        SectionSpan::new("about", 800.0, 600.0),
        SectionSpan::new("services", 1400.0, 700.0),
        SectionSpan::new("contact", 2100.0, 900.0),
    ]
}

#[test]
fn test_header_threshold() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(50.0), "Threshold is strictly greater-than");
    assert!(header_scrolled(50.1));
}

#[test]
fn test_back_to_top_threshold() {
    assert!(!back_to_top_visible(400.0));
    assert!(back_to_top_visible(401.0));
    assert!(!back_to_top_visible(0.0));
}

#[test]
fn test_active_section_at_top_of_page() {
    let sections = page_sections();
    // home's range starts at -100 after the offset, so offset 0 matches it
    assert_eq!(active_section(0.0, &sections), Some("home"));
}

#[test]
fn test_active_section_mid_page() {
    let sections = page_sections();
    // about spans (700, 1300]
    assert_eq!(active_section(750.0, &sections), Some("about"));
    assert_eq!(active_section(1300.0, &sections), Some("about"));
    assert_eq!(active_section(1300.5, &sections), Some("services"));
}

#[test]
fn test_exactly_one_match_for_disjoint_ranges() {
    let sections = page_sections();
    for y in [10.0, 500.0, 900.0, 1500.0, 2500.0] {
        assert!(
            active_section(y, &sections).is_some(),
            "Offset {y} should fall in exactly one section"
        );
    }
}

#[test]
fn test_overlapping_ranges_last_in_document_order_wins() {
    let sections = vec![
        SectionSpan::new("first", 0.0, 1000.0),
        SectionSpan::new("second", 400.0, 1000.0),
    ];

    // Both ranges contain 500; the later section must win
    assert_eq!(active_section(500.0, &sections), Some("second"));
    // Only the first range contains 200
    assert_eq!(active_section(200.0, &sections), Some("first"));
}

#[test]
fn test_no_active_section_past_the_end() {
    let sections = page_sections();
    assert_eq!(active_section(5000.0, &sections), None);
}

#[test]
fn test_smooth_scroll_target_subtracts_header() {
    assert_eq!(smooth_scroll_target(800.0, 80.0), 720.0);
    assert_eq!(smooth_scroll_target(40.0, 80.0), 0.0, "Clamped at the top");
}

#[test]
fn test_half_visible_threshold() {
    // Viewport 0..600, row at 300 with height 200: fully visible
    assert!(half_visible(0.0, 600.0, 300.0, 200.0));
    // Row at 550: only 50 of 200 visible
    assert!(!half_visible(0.0, 600.0, 550.0, 200.0));
    // Row at 500: exactly half visible
    assert!(half_visible(0.0, 600.0, 500.0, 200.0));
    // Scrolled past the row entirely
    assert!(!half_visible(1000.0, 600.0, 300.0, 200.0));
}

#[test]
fn test_ease_out_cubic_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    // Out-of-range progress is clamped
    assert_eq!(ease_out_cubic(1.5), 1.0);
    assert_eq!(ease_out_cubic(-0.5), 0.0);
}

#[test]
fn test_ease_out_cubic_is_monotonic() {
    let mut last = 0.0;
    for i in 0..=100 {
        let v = ease_out_cubic(f64::from(i) / 100.0);
        assert!(v >= last, "Easing curve must never move backwards");
        last = v;
    }
}

#[test]
fn test_scroll_position_interpolation() {
    assert_eq!(scroll_position_at(100.0, 500.0, 0.0), 100.0);
    assert_eq!(scroll_position_at(100.0, 500.0, 1.0), 500.0);
    // Scrolling up works the same way
    assert_eq!(scroll_position_at(500.0, 0.0, 1.0), 0.0);
}
