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

//! GTK4 Application wrapper
//!
//! Sets up the GTK4 application lifecycle and assembles the one-page
//! portfolio window from its components.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds the page (sections, form, stats, footer)
//!   ├─ Overlays header, menu, toasts, banner, preloader
//!   └─ Wires handlers and teardown
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider, Overlay};
use std::path::PathBuf;
use std::rc::Rc;

use crate::ui::builders::{handlers, header::build_header, layout::build_page};
use crate::ui::components::{BackToTop, Component, CookieBanner, NavLinks, NavMenu, Preloader, ToastStack};
use crate::ui::controller::Controller;
use crate::ui::timers::TimerRegistry;

/// GTK4 Application for the portfolio page
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App with the given consent flag path
    ///
    /// # Arguments
    ///
    /// * `consent_path` - Path where the cookie-consent flag is stored
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Successfully initialised
    /// * `Err(String)` - Failed to create the Controller
    pub fn new(consent_path: PathBuf) -> Result<Self, String> {
        let app = Application::builder()
            .application_id("com.foliostudio.folio-shell")
            .build();

        let controller = Controller::new(consent_path)
            .map_err(|e| format!("Failed to create controller: {}", e))?;

        let controller = Rc::new(controller);

        Ok(Self { app, controller })
    }

    /// Runs the GTK4 application
    ///
    /// Starts the GTK4 main loop; blocks until the window closes.
    pub fn run(self) {
        let controller = self.controller.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        if let Some(display) = gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
    }

    /// Builds the main window UI
    ///
    /// Called when the application activates. Assembles the page body,
    /// overlays the floating chrome on top of it and wires all handlers.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Folio Studio")
            .default_width(1100)
            .default_height(800)
            .build();

        // Shared link registry: header links and menu links both live in
        // it, so active-section highlighting covers both in one pass
        let nav_links = Rc::new(NavLinks::new());

        let page = build_page(controller.clone());
        let header = build_header(&nav_links);
        let toasts = Rc::new(ToastStack::new());
        let back_to_top = Rc::new(BackToTop::new());
        let nav_menu = NavMenu::new(controller.clone(), &nav_links);
        let cookie_banner = CookieBanner::new(controller.clone());
        let preloader = Preloader::new();

        // Timers for smooth-scroll animations, cancelled on close
        let page_timers = Rc::new(TimerRegistry::new());

        // The page scrolls under the floating chrome
        let overlay = Overlay::new();
        overlay.set_child(Some(&page.scrolled));
        overlay.add_overlay(&header.widget);
        overlay.add_overlay(&toasts.widget());
        overlay.add_overlay(&back_to_top.widget());
        overlay.add_overlay(&cookie_banner.widget());
        overlay.add_overlay(&nav_menu.widget());
        overlay.add_overlay(&preloader.widget());
        window.set_child(Some(&overlay));

        page.form.connect_submit(toasts.clone());
        handlers::setup_scroll_handler(&controller, &page, &header, &nav_links, &back_to_top);
        handlers::setup_navigation(&page, &header, &nav_menu, &back_to_top, &page_timers);
        handlers::setup_key_handler(&window, &nav_menu);

        cookie_banner.arm();
        preloader.arm(&window, &overlay);

        // Uniform teardown: every component cancels its timers before the
        // window goes away, so no callback fires against dead widgets
        let components: Vec<Rc<dyn Component>> = vec![
            page.form.clone(),
            page.stats_row.clone(),
            page.footer.clone(),
            toasts,
            back_to_top,
            nav_menu,
            cookie_banner,
            preloader,
        ];
        let teardown_timers = page_timers.clone();
        window.connect_close_request(move |_| {
            eprintln!("🧹 Tearing down {} components", components.len());
            for component in &components {
                component.teardown();
            }
            teardown_timers.cancel_all();
            glib::Propagation::Proceed
        });

        window.present();
    }
}
