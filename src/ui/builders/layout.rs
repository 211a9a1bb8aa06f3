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

//! Page body construction
//!
//! Builds the scrollable one-page layout: hero, about (with the stats
//! row), services, portfolio, contact (with the form) and the footer.
//! Section ids here are the ones the navigation targets; the handlers
//! module measures each section's placement at scroll time, so the page
//! can reflow freely without stale offsets.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, Orientation, PolicyType, ScrolledWindow};
use std::rc::Rc;

use crate::ui::components::{Component, ContactForm, Footer, StatsRow};
use crate::ui::controller::Controller;

/// Service cards shown in the services section
const SERVICES: &[(&str, &str)] = &[
    (
        "🎨 Product Design",
        "Interfaces designed around real user journeys, from wireframe to polished visual language.",
    ),
    (
        "⚙️ Development",
        "Robust, maintainable applications built with an eye for performance and longevity.",
    ),
    (
        "📈 Strategy",
        "Positioning, messaging and measurable goals before a single pixel is drawn.",
    ),
];

/// Portfolio cards shown in the portfolio section
const PORTFOLIO: &[(&str, &str)] = &[
    ("Atlas CRM", "Sales pipeline platform for a logistics group"),
    ("Nordwind", "Brand and storefront for a furniture maker"),
    ("Pulse", "Patient intake flow for a private clinic"),
    ("Ledgerline", "Reporting dashboard for an accounting firm"),
];

/// The assembled page body
pub struct PageView {
    /// Scroll container; its vadjustment drives all scroll-derived state
    pub scrolled: ScrolledWindow,
    /// Vertical box holding the sections, the coordinate space for spans
    pub content: GtkBox,
    /// Section widgets by id, in document order
    pub sections: Vec<(String, GtkBox)>,
    /// Hero call-to-action, navigates to the contact section
    pub cta_button: Button,
    pub stats_row: Rc<StatsRow>,
    pub form: Rc<ContactForm>,
    pub footer: Rc<Footer>,
}

/// Builds the scrollable page body
pub fn build_page(controller: Rc<Controller>) -> Rc<PageView> {
    let content = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(0)
        .css_classes(["page"])
        .build();

    let mut sections = Vec::new();

    // Hero
    let home = section("home", &["section", "section--home"]);
    let hero_title = Label::builder()
        .label("We build digital products people love")
        .wrap(true)
        .justify(gtk4::Justification::Center)
        .css_classes(["hero__title"])
        .build();
    let hero_subtitle = Label::builder()
        .label("A small studio for design, development and product strategy.")
        .wrap(true)
        .justify(gtk4::Justification::Center)
        .css_classes(["hero__subtitle"])
        .build();
    let cta_button = Button::builder()
        .label("Get in touch")
        .halign(gtk4::Align::Center)
        .css_classes(["suggested-action", "hero__cta"])
        .build();
    home.append(&hero_title);
    home.append(&hero_subtitle);
    home.append(&cta_button);
    content.append(&home);
    sections.push(("home".to_string(), home));

    // About, with the animated stats row
    let stats_row = Rc::new(StatsRow::new());
    let about = section("about", &["section", "section--about"]);
    about.append(&heading("About us"));
    about.append(
        &Label::builder()
            .label(
                "We are a studio of designers and engineers who take products \
                 from first sketch to launch. Small teams, short feedback \
                 loops and work we are proud to sign.",
            )
            .wrap(true)
            .max_width_chars(70)
            .css_classes(["section__body"])
            .build(),
    );
    about.append(&stats_row.widget());
    content.append(&about);
    sections.push(("about".to_string(), about));

    // Services
    let services = section("services", &["section", "section--services"]);
    services.append(&heading("Services"));
    let service_row = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .spacing(24)
        .homogeneous(true)
        .build();
    for (title, body) in SERVICES {
        service_row.append(&card(title, body));
    }
    services.append(&service_row);
    content.append(&services);
    sections.push(("services".to_string(), services));

    // Portfolio
    let portfolio = section("portfolio", &["section", "section--portfolio"]);
    portfolio.append(&heading("Selected work"));
    let portfolio_grid = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .spacing(24)
        .homogeneous(true)
        .build();
    for (title, body) in PORTFOLIO {
        portfolio_grid.append(&card(title, body));
    }
    portfolio.append(&portfolio_grid);
    content.append(&portfolio);
    sections.push(("portfolio".to_string(), portfolio));

    // Contact
    let form = ContactForm::new(controller);
    let contact = section("contact", &["section", "section--contact"]);
    contact.append(&heading("Contact"));
    contact.append(&form.widget());
    content.append(&contact);
    sections.push(("contact".to_string(), contact));

    // Footer sits below the last section
    let footer = Rc::new(Footer::new());
    content.append(&footer.widget());

    let scrolled = ScrolledWindow::builder()
        .hscrollbar_policy(PolicyType::Never)
        .vscrollbar_policy(PolicyType::Automatic)
        .hexpand(true)
        .vexpand(true)
        .child(&content)
        .build();

    Rc::new(PageView {
        scrolled,
        content,
        sections,
        cta_button,
        stats_row,
        form,
        footer,
    })
}

/// One page section with its navigation id as widget name
fn section(id: &str, css: &[&str]) -> GtkBox {
    let section = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(16)
        .css_classes(css.to_vec())
        .build();
    section.set_widget_name(id);
    section
}

fn heading(text: &str) -> Label {
    Label::builder()
        .label(text)
        .css_classes(["section__heading"])
        .build()
}

fn card(title: &str, body: &str) -> GtkBox {
    let card = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(8)
        .css_classes(["card"])
        .build();
    card.append(
        &Label::builder()
            .label(title)
            .css_classes(["card__title"])
            .build(),
    );
    card.append(
        &Label::builder()
            .label(body)
            .wrap(true)
            .css_classes(["card__body"])
            .build(),
    );
    card
}
