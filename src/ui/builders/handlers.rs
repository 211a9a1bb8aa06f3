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

//! Event wiring
//!
//! Connects widgets to the Controller: the scroll pipeline feeding
//! header/back-to-top/active-link/stats state, smooth scrolling for nav
//! links and the back-to-top control, the menu toggle and the Escape key.
//!
//! Section placement is measured at event time with `compute_point`, so
//! window resizes and reflows never leave the navigation working against
//! stale offsets.

use gtk4::prelude::*;
use gtk4::{Adjustment, ApplicationWindow, EventControllerKey};
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::header::HeaderBar;
use super::layout::PageView;
use crate::core::scroll::{self, SMOOTH_SCROLL_MS};
use crate::core::types::SectionSpan;
use crate::ui::components::{BackToTop, Component, NavLinks, NavMenu};
use crate::ui::controller::Controller;
use crate::ui::timers::TimerRegistry;

/// Smooth-scroll frame interval, roughly 60 fps
const SCROLL_TICK_MS: u64 = 16;

/// Measures every section's placement inside the page content
///
/// Sections that cannot be measured yet (not mapped) are skipped; the
/// next scroll event re-measures.
pub fn section_spans(page: &PageView) -> Vec<SectionSpan> {
    page.sections
        .iter()
        .filter_map(|(id, widget)| {
            let point = widget.compute_point(&page.content, &gtk4::graphene::Point::zero())?;
            Some(SectionSpan::new(
                id.as_str(),
                f64::from(point.y()),
                f64::from(widget.height()),
            ))
        })
        .collect()
}

/// Animates the adjustment to `target` with an ease-out curve
///
/// The target is clamped to the scrollable range. Runs on the shared
/// page timer registry, so teardown cancels an in-flight animation.
pub fn smooth_scroll_to(adjustment: &Adjustment, target: f64, timers: &Rc<TimerRegistry>) {
    let from = adjustment.value();
    let max = (adjustment.upper() - adjustment.page_size()).max(0.0);
    let to = target.clamp(adjustment.lower(), max);
    if (to - from).abs() < 0.5 {
        return;
    }

    let started = Instant::now();
    let adjustment = adjustment.clone();
    timers.repeating(Duration::from_millis(SCROLL_TICK_MS), move || {
        let t = started.elapsed().as_millis() as f64 / SMOOTH_SCROLL_MS as f64;
        adjustment.set_value(scroll::scroll_position_at(from, to, t));

        if t >= 1.0 {
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    });
}

/// Scrolls so `section_id` lands just below the floating header
pub fn navigate_to_section(
    page: &PageView,
    header: &HeaderBar,
    timers: &Rc<TimerRegistry>,
    section_id: &str,
) {
    let spans = section_spans(page);
    let Some(span) = spans.into_iter().find(|s| s.id == section_id) else {
        return;
    };

    let header_height = f64::from(header.widget.height());
    let target = scroll::smooth_scroll_target(span.top, header_height);
    smooth_scroll_to(&page.scrolled.vadjustment(), target, timers);
}

/// Wires the scroll pipeline
///
/// Every vadjustment change recomputes the scroll-derived state through
/// the Controller and applies it: header styling, back-to-top
/// visibility, active nav link and the stats row trigger. Also runs once
/// immediately so the initial state is consistent.
pub fn setup_scroll_handler(
    controller: &Rc<Controller>,
    page: &Rc<PageView>,
    header: &Rc<HeaderBar>,
    nav_links: &Rc<NavLinks>,
    back_to_top: &Rc<BackToTop>,
) {
    let adjustment = page.scrolled.vadjustment();

    let apply = {
        let controller = Rc::clone(controller);
        let page = Rc::clone(page);
        let header = Rc::clone(header);
        let nav_links = Rc::clone(nav_links);
        let back_to_top = Rc::clone(back_to_top);

        move |adjustment: &Adjustment| {
            let scroll_y = adjustment.value();
            let spans = section_spans(&page);
            let update = controller.sync_scroll(scroll_y, &spans);

            header.set_scrolled(update.header_scrolled);
            back_to_top.set_revealed(update.back_to_top_visible);
            nav_links.set_active(update.active_section_id.as_deref());

            let stats = page.stats_row.widget();
            if let Some(point) =
                stats.compute_point(&page.content, &gtk4::graphene::Point::zero())
            {
                page.stats_row.maybe_trigger(
                    scroll_y,
                    adjustment.page_size(),
                    f64::from(point.y()),
                    f64::from(stats.height()),
                );
            }
        }
    };

    apply(&adjustment);
    adjustment.connect_value_changed(apply);
}

/// Wires every navigation entry point to the smooth scroll
///
/// Header links, menu links, the hero call-to-action and the
/// back-to-top control all resolve through `navigate_to_section`.
pub fn setup_navigation(
    page: &Rc<PageView>,
    header: &Rc<HeaderBar>,
    nav_menu: &Rc<NavMenu>,
    back_to_top: &Rc<BackToTop>,
    timers: &Rc<TimerRegistry>,
) {
    for (id, link) in &header.links {
        let page = Rc::clone(page);
        let header = Rc::clone(header);
        let timers = Rc::clone(timers);
        let id = id.clone();
        link.connect_clicked(move |_| {
            navigate_to_section(&page, &header, &timers, &id);
        });
    }

    {
        let page = Rc::clone(page);
        let header = Rc::clone(header);
        let timers = Rc::clone(timers);
        nav_menu.connect_navigate(move |id| {
            navigate_to_section(&page, &header, &timers, id);
        });
    }

    {
        let cta = page.cta_button.clone();
        let page = Rc::clone(page);
        let header = Rc::clone(header);
        let timers = Rc::clone(timers);
        cta.connect_clicked(move |_| {
            navigate_to_section(&page, &header, &timers, "contact");
        });
    }

    {
        let page = Rc::clone(page);
        let timers = Rc::clone(timers);
        back_to_top.connect_clicked(move || {
            smooth_scroll_to(&page.scrolled.vadjustment(), 0.0, &timers);
        });
    }

    {
        let nav_menu = Rc::clone(nav_menu);
        header.toggle_button.connect_clicked(move |_| {
            nav_menu.toggle();
        });
    }
}

/// Escape closes the slide-in menu when it is open
pub fn setup_key_handler(window: &ApplicationWindow, nav_menu: &Rc<NavMenu>) {
    let key_controller = EventControllerKey::new();

    let nav_menu = Rc::clone(nav_menu);
    key_controller.connect_key_pressed(move |_, key, _, _| {
        if key == gtk4::gdk::Key::Escape && nav_menu.is_open() {
            nav_menu.close();
            return glib::Propagation::Stop;
        }
        glib::Propagation::Proceed
    });

    window.add_controller(key_controller);
}
