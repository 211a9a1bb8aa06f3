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

//! Scroll-derived page state
//!
//! Pure functions mapping a vertical scroll offset onto UI state: header
//! styling, back-to-top visibility, the active nav section and the
//! smooth-scroll animation curve. The view layer feeds these from the
//! scrolled window's vadjustment on every change and once at init.

use crate::core::types::SectionSpan;

/// Scroll offset past which the header takes its "scrolled" styling
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll offset past which the back-to-top control is shown
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

/// Slack subtracted from each section top when matching the active section
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Duration of the smooth-scroll animation
pub const SMOOTH_SCROLL_MS: u64 = 400;

/// True when the header should carry the "scrolled" class
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// True when the back-to-top control should be visible
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Selects the active section for the given scroll offset
///
/// A section matches when `top - 100 < scroll_y <= top - 100 + height`.
/// Sections are checked in document order and each match overwrites the
/// previous one, so when ranges overlap the LAST matching section in
/// document order wins. Disjoint ranges produce exactly one match.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [SectionSpan]) -> Option<&'a str> {
    let mut active = None;

    for section in sections {
        let top = section.top - ACTIVE_SECTION_OFFSET;
        if scroll_y > top && scroll_y <= top + section.height {
            active = Some(section.id.as_str());
        }
    }

    active
}

/// Target offset for a smooth scroll to a section
///
/// The header floats over the page content, so the section top must be
/// pulled up by the header height to end up below it. Clamped at 0 for
/// sections near the top of the page.
pub fn smooth_scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// True when at least half of a row is inside the viewport
///
/// Used by the stats counter to decide when the animation fires.
pub fn half_visible(scroll_y: f64, viewport_height: f64, top: f64, height: f64) -> bool {
    let visible_top = scroll_y.max(top);
    let visible_bottom = (scroll_y + viewport_height).min(top + height);
    let visible = (visible_bottom - visible_top).max(0.0);

    height > 0.0 && visible >= height * 0.5
}

/// Ease-out cubic curve for the smooth-scroll animation
///
/// `t` is the normalised animation progress in `[0, 1]`; the return value
/// is the normalised distance covered.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Interpolates the scroll position at animation progress `t`
pub fn scroll_position_at(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * ease_out_cubic(t)
}
