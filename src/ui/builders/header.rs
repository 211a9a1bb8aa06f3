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

//! Fixed header bar
//!
//! Floats over the top of the page content. Carries the brand, a row of
//! inline section links and the hamburger toggle for the slide-in menu.
//! Past the scroll threshold it takes the `header--scrolled` class for
//! its condensed styling.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, Orientation};
use std::rc::Rc;

use crate::ui::components::{NavLinks, NAV_SECTIONS};

/// Fixed header floating over the page
pub struct HeaderBar {
    /// Root bar, overlaid at the top of the window
    pub widget: GtkBox,
    /// Hamburger button opening the slide-in menu
    pub toggle_button: Button,
    /// Inline link buttons by section id
    pub links: Vec<(String, Button)>,
}

impl HeaderBar {
    /// Adds or removes the condensed "scrolled" styling
    pub fn set_scrolled(&self, scrolled: bool) {
        if scrolled {
            self.widget.add_css_class("header--scrolled");
        } else {
            self.widget.remove_css_class("header--scrolled");
        }
    }
}

/// Builds the header bar and registers its links for active highlighting
pub fn build_header(nav_links: &Rc<NavLinks>) -> Rc<HeaderBar> {
    let widget = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .spacing(16)
        .hexpand(true)
        .valign(gtk4::Align::Start)
        .css_classes(["header"])
        .build();

    let brand = Label::builder()
        .label("Folio Studio")
        .css_classes(["header__brand"])
        .build();
    widget.append(&brand);

    let spacer = GtkBox::builder().hexpand(true).build();
    widget.append(&spacer);

    let mut links = Vec::with_capacity(NAV_SECTIONS.len());
    for (id, label) in NAV_SECTIONS {
        let link = Button::builder()
            .label(*label)
            .css_classes(["nav-link", "flat"])
            .build();
        nav_links.register(id, &link);
        widget.append(&link);
        links.push((id.to_string(), link));
    }

    let toggle_button = Button::builder()
        .label("☰")
        .tooltip_text("Menu")
        .css_classes(["header__toggle", "flat"])
        .build();
    widget.append(&toggle_button);

    Rc::new(HeaderBar {
        widget,
        toggle_button,
        links,
    })
}
