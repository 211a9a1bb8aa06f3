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

//! Cookie consent banner
//!
//! Slides up from the bottom edge one second after startup unless consent
//! was recorded in an earlier session. Accepting persists the flag and
//! hides the banner; a failed write is logged and the banner still hides,
//! so the user is asked again next session instead of being nagged now.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, Orientation, Revealer, RevealerTransitionType};
use std::rc::Rc;
use std::time::Duration;

use super::Component;
use crate::ui::controller::Controller;
use crate::ui::timers::TimerRegistry;

/// Delay before the banner slides up on first visit
const BANNER_DELAY_MS: u64 = 1000;

const CONSENT_PROMPT: &str =
    "We use cookies to improve your experience. By continuing to browse, you agree to our use of cookies.";

/// Bottom-edge consent banner
pub struct CookieBanner {
    revealer: Revealer,
    controller: Rc<Controller>,
    timers: Rc<TimerRegistry>,
}

impl CookieBanner {
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(16)
            .css_classes(["cookie-banner"])
            .build();

        let text = Label::builder()
            .label(CONSENT_PROMPT)
            .wrap(true)
            .xalign(0.0)
            .hexpand(true)
            .build();
        row.append(&text);

        let accept = Button::builder()
            .label("Accept")
            .valign(gtk4::Align::Center)
            .css_classes(["suggested-action"])
            .build();
        row.append(&accept);

        let revealer = Revealer::builder()
            .transition_type(RevealerTransitionType::SlideUp)
            .transition_duration(300)
            .reveal_child(false)
            .valign(gtk4::Align::End)
            .child(&row)
            .build();

        let banner = Rc::new(Self {
            revealer,
            controller,
            timers: Rc::new(TimerRegistry::new()),
        });

        let for_accept = Rc::clone(&banner);
        accept.connect_clicked(move |_| for_accept.accept());

        banner
    }

    /// Schedules the delayed reveal unless consent is already on record
    pub fn arm(&self) {
        if self.controller.has_consent() {
            return;
        }
        let revealer = self.revealer.clone();
        self.timers.once(Duration::from_millis(BANNER_DELAY_MS), move || {
            revealer.set_reveal_child(true);
        });
    }

    /// Persists consent and hides the banner
    ///
    /// The banner hides even when the write fails; the flag simply stays
    /// unset for the next session.
    fn accept(&self) {
        if let Err(e) = self.controller.accept_consent() {
            eprintln!("⚠️  Failed to persist cookie consent: {e}");
        }
        self.revealer.set_reveal_child(false);
    }
}

impl Component for CookieBanner {
    fn widget(&self) -> gtk4::Widget {
        self.revealer.clone().upcast()
    }

    fn teardown(&self) {
        self.timers.cancel_all();
    }
}
