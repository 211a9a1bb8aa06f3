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

//! Page footer
//!
//! Copyright line stamped with the current year at build time of the
//! page, so it never goes stale.

use chrono::Datelike;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation};

use super::Component;

/// Current year for the copyright stamp
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Static page footer
pub struct Footer {
    root: GtkBox,
}

impl Footer {
    pub fn new() -> Self {
        let root = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(4)
            .css_classes(["footer"])
            .build();

        let copyright = Label::builder()
            .label(format!(
                "© {} Folio Studio. All rights reserved.",
                current_year()
            ))
            .css_classes(["footer__copyright"])
            .build();
        let tagline = Label::builder()
            .label("Design · Development · Strategy")
            .css_classes(["footer__tagline"])
            .build();

        root.append(&copyright);
        root.append(&tagline);

        Self { root }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Footer {
    fn widget(&self) -> gtk4::Widget {
        self.root.clone().upcast()
    }

    fn teardown(&self) {}
}
