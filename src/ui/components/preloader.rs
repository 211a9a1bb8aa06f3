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

//! Startup preloader
//!
//! A full-window overlay shown while the page builds. Once the window is
//! mapped the overlay fades out and is detached after the fade, leaving
//! no dead widget behind the page.

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box as GtkBox, Label, Orientation, Overlay, Spinner};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::Component;
use crate::ui::timers::TimerRegistry;

/// Fade-out length before the overlay is detached
const FADE_MS: u64 = 500;

/// Full-window startup overlay
pub struct Preloader {
    root: GtkBox,
    /// Set when the fade has been scheduled
    dismissed: Cell<bool>,
    timers: Rc<TimerRegistry>,
}

impl Preloader {
    pub fn new() -> Rc<Self> {
        let root = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(16)
            .hexpand(true)
            .vexpand(true)
            .halign(gtk4::Align::Fill)
            .valign(gtk4::Align::Fill)
            .css_classes(["preloader"])
            .build();

        let spinner = Spinner::builder()
            .spinning(true)
            .width_request(48)
            .height_request(48)
            .halign(gtk4::Align::Center)
            .valign(gtk4::Align::End)
            .vexpand(true)
            .build();
        let caption = Label::builder()
            .label("Loading…")
            .valign(gtk4::Align::Start)
            .vexpand(true)
            .css_classes(["preloader__caption"])
            .build();

        root.append(&spinner);
        root.append(&caption);

        Rc::new(Self {
            root,
            dismissed: Cell::new(false),
            timers: Rc::new(TimerRegistry::new()),
        })
    }

    /// Fades the overlay out once `window` is first mapped
    ///
    /// `overlay` must be the container the preloader was added to; the
    /// widget is detached from it after the fade.
    pub fn arm(self: &Rc<Self>, window: &ApplicationWindow, overlay: &Overlay) {
        let preloader = Rc::clone(self);
        let overlay = overlay.clone();
        window.connect_map(move |window| {
            // connect_map fires on every map; only the first one counts
            if preloader.dismissed.get() {
                return;
            }
            preloader.dismissed.set(true);

            window.add_css_class("loaded");
            preloader.root.add_css_class("preloader--hidden");

            let root = preloader.root.clone();
            let overlay = overlay.clone();
            preloader.timers.once(Duration::from_millis(FADE_MS), move || {
                if root.parent().is_some() {
                    overlay.remove_overlay(&root);
                }
            });
        });
    }
}

impl Component for Preloader {
    fn widget(&self) -> gtk4::Widget {
        self.root.clone().upcast()
    }

    fn teardown(&self) {
        self.timers.cancel_all();
    }
}
