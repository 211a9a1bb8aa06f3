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

//! Animated stats counters
//!
//! A row of headline figures that count up from zero the first time the
//! row scrolls at least half into view. Each figure's target and display
//! format are parsed from its initial label text, so the markup stays the
//! single source of truth. The animation runs once per page lifetime.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::Component;
use crate::core::counter::{StatTarget, COUNTER_STEPS, COUNTER_STEP_MS};
use crate::core::scroll::half_visible;
use crate::ui::timers::TimerRegistry;

/// Headline figures: display text and caption
const STATS: &[(&str, &str)] = &[
    ("+150", "Projects delivered"),
    ("98%", "Client satisfaction"),
    ("24h", "Avg. response time"),
    ("12", "Years in business"),
];

/// Count-up stats row
pub struct StatsRow {
    root: GtkBox,
    /// Number label and its parsed target, per stat
    figures: Vec<(Label, StatTarget)>,
    /// Set once the animation has been triggered
    fired: Cell<bool>,
    timers: Rc<TimerRegistry>,
}

impl StatsRow {
    pub fn new() -> Self {
        let root = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(32)
            .homogeneous(true)
            .css_classes(["stats-row"])
            .build();

        let mut figures = Vec::with_capacity(STATS.len());
        for (text, caption) in STATS {
            let cell = GtkBox::builder()
                .orientation(Orientation::Vertical)
                .spacing(4)
                .css_classes(["stat"])
                .build();

            let number = Label::builder()
                .label(*text)
                .css_classes(["stat__number"])
                .build();
            let caption = Label::builder()
                .label(*caption)
                .css_classes(["stat__caption"])
                .build();

            cell.append(&number);
            cell.append(&caption);
            root.append(&cell);

            figures.push((number.clone(), StatTarget::parse(text)));
        }

        Self {
            root,
            figures,
            fired: Cell::new(false),
            timers: Rc::new(TimerRegistry::new()),
        }
    }

    /// Starts the animation once the row is half inside the viewport
    ///
    /// Later calls are no-ops; the counters never re-run.
    pub fn maybe_trigger(&self, scroll_y: f64, viewport_height: f64, top: f64, height: f64) {
        if self.fired.get() || !half_visible(scroll_y, viewport_height, top, height) {
            return;
        }
        self.fired.set(true);

        for (label, target) in &self.figures {
            self.animate(label.clone(), *target);
        }
    }

    /// Drives one figure from zero to its target over the fixed step grid
    fn animate(&self, label: Label, target: StatTarget) {
        let step = Cell::new(0u32);
        self.timers
            .repeating(Duration::from_millis(COUNTER_STEP_MS), move || {
                let current = step.get() + 1;
                step.set(current);

                let value = target.value_at_step(current);
                label.set_text(&target.format_value(value));

                if current >= COUNTER_STEPS {
                    glib::ControlFlow::Break
                } else {
                    glib::ControlFlow::Continue
                }
            });
    }

    /// Whether the count-up has already run
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

impl Default for StatsRow {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatsRow {
    fn widget(&self) -> gtk4::Widget {
        self.root.clone().upcast()
    }

    fn teardown(&self) {
        self.timers.cancel_all();
    }
}
