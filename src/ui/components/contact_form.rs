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

//! Contact form
//!
//! Name, email, phone, subject and message fields with validation on
//! submit, a live phone input mask and a simulated delivery. While a
//! delivery is in flight the submit button goes busy and resubmits are
//! rejected; the button is restored before the outcome is handled, so a
//! failed delivery still leaves the form usable.

use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Button, DropDown, Entry, Grid, Label, Orientation, ScrolledWindow, TextView,
    WrapMode,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::{Component, ToastStack};
use crate::core::phone::format_phone;
use crate::core::types::ContactSubmission;
use crate::ui::controller::{
    Controller, SUBMIT_DELAY_MS, SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
use crate::ui::timers::TimerRegistry;

/// Subject choices; index 0 is the placeholder and maps to an empty
/// subject
const SUBJECTS: &[&str] = &[
    "Select a subject",
    "Consultation",
    "Partnership",
    "Feedback",
    "Other",
];

const SUBMIT_LABEL: &str = "📨 Send Message";
const BUSY_LABEL: &str = "⏳ Sending...";

/// Contact form widget
pub struct ContactForm {
    root: GtkBox,
    name_entry: Entry,
    email_entry: Entry,
    phone_entry: Entry,
    subject_dropdown: DropDown,
    message_view: TextView,
    submit_button: Button,
    controller: Rc<Controller>,
    timers: Rc<TimerRegistry>,
}

impl ContactForm {
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        let root = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .css_classes(["contact-form"])
            .build();

        let grid = Grid::builder()
            .row_spacing(12)
            .column_spacing(12)
            .build();

        let name_entry = Entry::builder()
            .placeholder_text("Your full name")
            .hexpand(true)
            .build();
        let email_entry = Entry::builder()
            .placeholder_text("you@example.com")
            .hexpand(true)
            .build();
        let phone_entry = Entry::builder()
            .placeholder_text("(11) 98765-4321")
            .hexpand(true)
            .build();
        let subject_dropdown = DropDown::from_strings(SUBJECTS);
        subject_dropdown.set_selected(0);
        subject_dropdown.set_hexpand(true);

        let message_view = TextView::builder()
            .wrap_mode(WrapMode::WordChar)
            .build();
        let message_scroll = ScrolledWindow::builder()
            .child(&message_view)
            .min_content_height(120)
            .hexpand(true)
            .css_classes(["contact-form__message"])
            .build();

        let rows: [(&str, &gtk4::Widget); 5] = [
            ("👤 Name:", name_entry.upcast_ref()),
            ("✉️ Email:", email_entry.upcast_ref()),
            ("📞 Phone:", phone_entry.upcast_ref()),
            ("📋 Subject:", subject_dropdown.upcast_ref()),
            ("📝 Message:", message_scroll.upcast_ref()),
        ];
        for (row, (caption, widget)) in rows.iter().enumerate() {
            let label = Label::builder()
                .label(*caption)
                .halign(gtk4::Align::End)
                .valign(gtk4::Align::Start)
                .build();
            grid.attach(&label, 0, row as i32, 1, 1);
            grid.attach(*widget, 1, row as i32, 1, 1);
        }
        root.append(&grid);

        let submit_button = Button::builder()
            .label(SUBMIT_LABEL)
            .halign(gtk4::Align::End)
            .css_classes(["suggested-action"])
            .build();
        root.append(&submit_button);

        Self::wire_phone_mask(&phone_entry);

        Rc::new(Self {
            root,
            name_entry,
            email_entry,
            phone_entry,
            subject_dropdown,
            message_view,
            submit_button,
            controller,
            timers: Rc::new(TimerRegistry::new()),
        })
    }

    /// Reformats the phone entry on every edit
    ///
    /// The re-entrancy flag keeps the `set_text` inside the handler from
    /// re-triggering it.
    fn wire_phone_mask(phone_entry: &Entry) {
        let masking = Rc::new(Cell::new(false));
        phone_entry.connect_changed(move |entry| {
            if masking.get() {
                return;
            }
            let masked = format_phone(&entry.text());
            if masked != entry.text().as_str() {
                masking.set(true);
                entry.set_text(&masked);
                entry.set_position(-1);
                masking.set(false);
            }
        });
    }

    /// Snapshot of the current field values
    pub fn submission(&self) -> ContactSubmission {
        let phone = self.phone_entry.text().to_string();
        let selected = self.subject_dropdown.selected() as usize;
        let subject = if selected == 0 || selected >= SUBJECTS.len() {
            String::new()
        } else {
            SUBJECTS[selected].to_string()
        };

        let buffer = self.message_view.buffer();
        let message = buffer
            .text(&buffer.start_iter(), &buffer.end_iter(), false)
            .to_string();

        ContactSubmission {
            name: self.name_entry.text().to_string(),
            email: self.email_entry.text().to_string(),
            phone: if phone.is_empty() { None } else { Some(phone) },
            subject,
            message,
        }
    }

    /// Clears every field back to its initial state
    pub fn reset(&self) {
        self.name_entry.set_text("");
        self.email_entry.set_text("");
        self.phone_entry.set_text("");
        self.subject_dropdown.set_selected(0);
        self.message_view.buffer().set_text("");
    }

    /// Wires the submit lifecycle against the toast stack
    ///
    /// Invalid submissions surface the first failure as an error toast.
    /// Valid ones go busy for the simulated delivery delay, then toast
    /// the outcome; the form only resets on success.
    pub fn connect_submit(self: &Rc<Self>, toasts: Rc<ToastStack>) {
        let form = Rc::clone(self);
        self.submit_button.connect_clicked(move |button| {
            let submission = form.submission();

            let report = form.controller.validate(&submission);
            if let Some(error) = report.first_error() {
                toasts.error(&error.to_string());
                return;
            }

            if form.controller.begin_submission().is_err() {
                eprintln!("⏳ Submission already in flight, ignoring resubmit");
                return;
            }

            button.set_label(BUSY_LABEL);
            button.set_sensitive(false);

            let timers = Rc::clone(&form.timers);
            let form = Rc::clone(&form);
            let toasts = Rc::clone(&toasts);
            let button = button.clone();
            timers.once(Duration::from_millis(SUBMIT_DELAY_MS), move || {
                // Restore the control first, whatever the outcome
                button.set_label(SUBMIT_LABEL);
                button.set_sensitive(true);

                match form.controller.complete_submission(&submission) {
                    Ok(()) => {
                        toasts.success(SUBMIT_SUCCESS_MESSAGE);
                        form.reset();
                    }
                    Err(e) => {
                        eprintln!("❌ Delivery failed: {e}");
                        toasts.error(SUBMIT_FAILURE_MESSAGE);
                    }
                }
            });
        });
    }
}

impl Component for ContactForm {
    fn widget(&self) -> gtk4::Widget {
        self.root.clone().upcast()
    }

    fn teardown(&self) {
        self.timers.cancel_all();
    }
}
