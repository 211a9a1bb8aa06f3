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

//! Toast notification stack
//!
//! Transient feedback messages stacked in the top-right corner of the
//! page. Each toast slides in, auto-dismisses after a configurable
//! duration (0 = persistent) and can be closed early via its close
//! button. Close and auto-dismiss may race; removal is guarded by a
//! parent check so the loser of the race is a no-op.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, Orientation, Revealer, RevealerTransitionType};
use std::rc::Rc;
use std::time::Duration;

use super::Component;
use crate::core::types::ToastKind;
use crate::ui::timers::TimerRegistry;

/// Default lifetime of a toast before auto-dismissal
pub const TOAST_DURATION_MS: u64 = 5000;

/// Exit transition length; removal from the stack waits this long after
/// the reveal is reversed
const TOAST_EXIT_MS: u64 = 300;

/// Stacked toast notifications
pub struct ToastStack {
    /// Vertical container the toasts are appended to
    stack: GtkBox,
    /// Timers for reveal, auto-dismiss and removal
    timers: Rc<TimerRegistry>,
}

impl ToastStack {
    pub fn new() -> Self {
        let stack = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(10)
            .halign(gtk4::Align::End)
            .valign(gtk4::Align::Start)
            .margin_top(100)
            .margin_end(20)
            .css_classes(["toast-stack"])
            .build();

        Self {
            stack,
            timers: Rc::new(TimerRegistry::new()),
        }
    }

    /// Shows a toast with the given kind and lifetime
    ///
    /// `duration_ms` of 0 keeps the toast up until the user closes it.
    pub fn show(&self, message: &str, kind: ToastKind, duration_ms: u64) {
        let toast = self.build_toast(message, kind);
        self.stack.append(&toast);

        // Reveal on the next tick so the slide-in transition runs
        let reveal = toast.clone();
        self.timers.once(Duration::from_millis(10), move || {
            reveal.set_reveal_child(true);
        });

        if duration_ms > 0 {
            let stack = self.stack.clone();
            let timers = Rc::clone(&self.timers);
            let toast = toast.clone();
            self.timers.once(Duration::from_millis(duration_ms), move || {
                Self::dismiss(&stack, &timers, &toast);
            });
        }
    }

    /// Success toast with the default lifetime
    pub fn success(&self, message: &str) {
        self.show(message, ToastKind::Success, TOAST_DURATION_MS);
    }

    /// Error toast with the default lifetime
    pub fn error(&self, message: &str) {
        self.show(message, ToastKind::Error, TOAST_DURATION_MS);
    }

    /// Warning toast with the default lifetime
    pub fn warning(&self, message: &str) {
        self.show(message, ToastKind::Warning, TOAST_DURATION_MS);
    }

    /// Info toast with the default lifetime
    pub fn info(&self, message: &str) {
        self.show(message, ToastKind::Info, TOAST_DURATION_MS);
    }

    /// Builds one toast row wrapped in its slide-in revealer
    fn build_toast(&self, message: &str, kind: ToastKind) -> Revealer {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .css_classes(["toast", kind.css_class()])
            .build();

        let glyph = Label::builder()
            .label(kind.glyph())
            .css_classes(["toast__glyph"])
            .build();

        let text = Label::builder()
            .label(message)
            .wrap(true)
            .max_width_chars(40)
            .xalign(0.0)
            .hexpand(true)
            .css_classes(["toast__message"])
            .build();

        let close = Button::builder()
            .label("✕")
            .css_classes(["toast__close", "flat"])
            .build();

        row.append(&glyph);
        row.append(&text);
        row.append(&close);

        let toast = Revealer::builder()
            .transition_type(RevealerTransitionType::SlideLeft)
            .transition_duration(TOAST_EXIT_MS as u32)
            .reveal_child(false)
            .child(&row)
            .build();

        let stack = self.stack.clone();
        let timers = Rc::clone(&self.timers);
        let toast_for_close = toast.clone();
        close.connect_clicked(move |_| {
            Self::dismiss(&stack, &timers, &toast_for_close);
        });

        toast
    }

    /// Reverses the reveal, then detaches the toast after the transition
    ///
    /// Already-detached toasts (close button racing the auto-dismiss
    /// timer) are left alone.
    fn dismiss(stack: &GtkBox, timers: &TimerRegistry, toast: &Revealer) {
        if toast.parent().is_none() {
            return;
        }
        toast.set_reveal_child(false);

        let stack = stack.clone();
        let toast = toast.clone();
        timers.once(Duration::from_millis(TOAST_EXIT_MS), move || {
            if toast.parent().is_some() {
                stack.remove(&toast);
            }
        });
    }

    /// Detaches every toast immediately
    pub fn clear(&self) {
        while let Some(child) = self.stack.first_child() {
            self.stack.remove(&child);
        }
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ToastStack {
    fn widget(&self) -> gtk4::Widget {
        self.stack.clone().upcast()
    }

    fn teardown(&self) {
        self.timers.cancel_all();
        self.clear();
    }
}
