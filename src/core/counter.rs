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

//! Stats counter animation maths
//!
//! A stat label displays a target such as `"100%"`, `"+500"`, `"24h"` or a
//! plain integer. The counter animates from 0 to the target over a fixed
//! duration in discrete linear steps, reformatting the original marker at
//! every tick. All the stepping logic lives here; the view layer only
//! drives a timer and writes the formatted string back into the label.

/// Animation duration in milliseconds
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Number of discrete animation steps
pub const COUNTER_STEPS: u32 = 60;

/// Interval between two animation ticks
pub const COUNTER_STEP_MS: u64 = COUNTER_DURATION_MS / COUNTER_STEPS as u64;

/// How a stat value is decorated when rendered
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatFormat {
    /// Percentage, rendered as `N%`
    Percent,
    /// Count with a leading plus, rendered as `+N`
    Plus,
    /// Hours, rendered as `Nh`
    Hours,
    /// Plain integer
    Plain,
}

/// A parsed stat target: the end value and its display decoration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatTarget {
    pub end: i64,
    pub format: StatFormat,
}

impl StatTarget {
    /// Parses a stat target from its displayed text
    ///
    /// The marker decides the decoration: `%` → percent, `+` → plus prefix,
    /// `h` → hours, anything else → plain. Digits are taken from the text
    /// itself; when none are present the fallbacks apply
    /// (100 for `%`, 500 for `+`, 24 for `h`, 100 plain).
    pub fn parse(text: &str) -> Self {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let value = digits.parse::<i64>().ok();

        if text.contains('%') {
            Self {
                end: value.unwrap_or(100),
                format: StatFormat::Percent,
            }
        } else if text.contains('+') {
            Self {
                end: value.unwrap_or(500),
                format: StatFormat::Plus,
            }
        } else if text.contains('h') {
            Self {
                end: value.unwrap_or(24),
                format: StatFormat::Hours,
            }
        } else {
            Self {
                end: value.unwrap_or(100),
                format: StatFormat::Plain,
            }
        }
    }

    /// Linear interpolation from 0 to the target
    ///
    /// Step 0 is the starting value, step [`COUNTER_STEPS`] (and anything
    /// beyond) is exactly the target, so the animation always lands on the
    /// displayed figure rather than a rounding neighbour.
    pub fn value_at_step(&self, step: u32) -> i64 {
        if step >= COUNTER_STEPS {
            return self.end;
        }
        let fraction = f64::from(step) / f64::from(COUNTER_STEPS);
        (self.end as f64 * fraction).round() as i64
    }

    /// Renders a value with this target's decoration
    pub fn format_value(&self, value: i64) -> String {
        match self.format {
            StatFormat::Percent => format!("{value}%"),
            StatFormat::Plus => format!("+{value}"),
            StatFormat::Hours => format!("{value}h"),
            StatFormat::Plain => value.to_string(),
        }
    }
}
