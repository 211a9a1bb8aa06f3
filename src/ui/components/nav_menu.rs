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

//! Slide-in navigation menu
//!
//! Compact-layout navigation: a panel of section links slides in from the
//! right over a click-catching scrim. While the menu is open the scrim
//! swallows pointer input over the page, so page content cannot be
//! scrolled or clicked behind it. Closing happens via the close button,
//! a click on the scrim, Escape, or following a link.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, GestureClick, Label, Orientation, Revealer, RevealerTransitionType};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::Component;
use crate::ui::controller::Controller;
use crate::ui::timers::TimerRegistry;

/// Sections reachable from the navigation, in page order
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("contact", "Contact"),
];

/// Panel slide transition length
const PANEL_TRANSITION_MS: u32 = 250;

/// Registry of nav link buttons for active-section highlighting
///
/// Header links and menu links both register here; `set_active` restyles
/// all of them in one pass, clearing every link before marking the match.
#[derive(Default)]
pub struct NavLinks {
    links: RefCell<Vec<(String, Button)>>,
}

impl NavLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a link button for the given section id
    pub fn register(&self, section_id: &str, button: &Button) {
        self.links
            .borrow_mut()
            .push((section_id.to_string(), button.clone()));
    }

    /// Marks the link for `section_id` active and clears all others
    ///
    /// Clear-then-set, so passing `None` leaves no link highlighted.
    pub fn set_active(&self, section_id: Option<&str>) {
        for (id, button) in self.links.borrow().iter() {
            button.remove_css_class("active");
            if Some(id.as_str()) == section_id {
                button.add_css_class("active");
            }
        }
    }
}

/// Slide-in menu with scrim
pub struct NavMenu {
    /// Root covering the page; hidden while the menu is closed
    root: GtkBox,
    /// Slide-in revealer holding the link panel
    panel: Revealer,
    /// First link, focused when the menu opens
    first_link: Button,
    /// Link buttons by section id, for navigation wiring
    link_buttons: RefCell<Vec<(String, Button)>>,
    controller: Rc<Controller>,
    timers: Rc<TimerRegistry>,
}

impl NavMenu {
    pub fn new(controller: Rc<Controller>, nav_links: &Rc<NavLinks>) -> Rc<Self> {
        let root = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .hexpand(true)
            .vexpand(true)
            .visible(false)
            .build();

        let scrim = GtkBox::builder()
            .hexpand(true)
            .vexpand(true)
            .css_classes(["nav-scrim"])
            .build();

        let panel_body = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .width_request(280)
            .css_classes(["nav-panel"])
            .build();

        let close = Button::builder()
            .label("✕")
            .halign(gtk4::Align::End)
            .css_classes(["nav-panel__close", "flat"])
            .build();
        panel_body.append(&close);

        let title = Label::builder()
            .label("Menu")
            .xalign(0.0)
            .css_classes(["nav-panel__title"])
            .build();
        panel_body.append(&title);

        let mut first_link = None;
        let mut link_buttons = Vec::new();
        for (id, label) in NAV_SECTIONS {
            let link = Button::builder()
                .label(*label)
                .css_classes(["nav-link", "flat"])
                .build();
            nav_links.register(id, &link);
            panel_body.append(&link);
            if first_link.is_none() {
                first_link = Some(link.clone());
            }
            link_buttons.push((id.to_string(), link));
        }
        // NAV_SECTIONS is non-empty, so the first link always exists
        let first_link = first_link.unwrap_or_else(|| close.clone());

        let panel = Revealer::builder()
            .transition_type(RevealerTransitionType::SlideLeft)
            .transition_duration(PANEL_TRANSITION_MS)
            .reveal_child(false)
            .child(&panel_body)
            .build();

        root.append(&scrim);
        root.append(&panel);

        let menu = Rc::new(Self {
            root,
            panel,
            first_link,
            link_buttons: RefCell::new(link_buttons),
            controller,
            timers: Rc::new(TimerRegistry::new()),
        });

        let for_close = Rc::clone(&menu);
        close.connect_clicked(move |_| for_close.close());

        // Clicking outside the panel closes the menu
        let for_scrim = Rc::clone(&menu);
        let click = GestureClick::new();
        click.connect_released(move |_, _, _, _| for_scrim.close());
        scrim.add_controller(click);

        menu
    }

    /// Opens the menu and moves keyboard focus to the first link
    pub fn open(&self) {
        if !self.controller.open_menu() {
            return;
        }
        // A hide scheduled by a just-finished close must not fire now
        self.timers.cancel_all();
        self.root.set_visible(true);
        self.panel.set_reveal_child(true);
        self.first_link.grab_focus();
    }

    /// Closes the menu; the root hides after the slide-out finishes
    pub fn close(&self) {
        if !self.controller.close_menu() {
            return;
        }
        self.panel.set_reveal_child(false);

        let root = self.root.clone();
        self.timers
            .once(Duration::from_millis(u64::from(PANEL_TRANSITION_MS)), move || {
                root.set_visible(false);
            });
    }

    /// Whether the menu is currently open
    pub fn is_open(&self) -> bool {
        self.controller.menu_open()
    }

    /// Flips the menu open or closed
    pub fn toggle(&self) {
        if self.controller.menu_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Connects a navigation callback to every link
    ///
    /// The callback receives the section id; the menu closes itself before
    /// invoking it.
    pub fn connect_navigate<F>(self: &Rc<Self>, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        let callback = Rc::new(callback);
        for (id, link) in self.link_buttons.borrow().iter() {
            let menu = Rc::clone(self);
            let callback = Rc::clone(&callback);
            let id = id.clone();
            link.connect_clicked(move |_| {
                menu.close();
                callback(&id);
            });
        }
    }
}

impl Component for NavMenu {
    fn widget(&self) -> gtk4::Widget {
        self.root.clone().upcast()
    }

    fn teardown(&self) {
        self.timers.cancel_all();
    }
}
