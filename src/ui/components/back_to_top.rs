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

//! Back-to-top control
//!
//! A floating button in the bottom-right corner, faded in once the page
//! has scrolled past the visibility threshold. Clicking it smooth-scrolls
//! back to the top; the scroll itself is wired by the composition root.

use gtk4::prelude::*;
use gtk4::{Button, Revealer, RevealerTransitionType};

use super::Component;

/// Floating scroll-to-top button
pub struct BackToTop {
    revealer: Revealer,
    button: Button,
}

impl BackToTop {
    pub fn new() -> Self {
        let button = Button::builder()
            .label("⬆")
            .tooltip_text("Back to top")
            .css_classes(["back-to-top"])
            .build();

        let revealer = Revealer::builder()
            .transition_type(RevealerTransitionType::Crossfade)
            .transition_duration(300)
            .reveal_child(false)
            .halign(gtk4::Align::End)
            .valign(gtk4::Align::End)
            .margin_end(24)
            .margin_bottom(24)
            .child(&button)
            .build();

        Self { revealer, button }
    }

    /// Shows or hides the control for the current scroll offset
    pub fn set_revealed(&self, visible: bool) {
        self.revealer.set_reveal_child(visible);
    }

    /// Connects the click action
    pub fn connect_clicked<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.button.connect_clicked(move |_| callback());
    }
}

impl Default for BackToTop {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BackToTop {
    fn widget(&self) -> gtk4::Widget {
        self.revealer.clone().upcast()
    }

    fn teardown(&self) {
        // No timers of its own; the crossfade is driven by GTK
        self.revealer.set_reveal_child(false);
    }
}
