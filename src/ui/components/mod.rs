//! UI Components
//!
//! Reusable GTK4 widgets for the portfolio page.
//!
//! # Components
//!
//! - `nav_menu.rs` - Slide-in navigation menu with click-catching scrim
//! - `toast_stack.rs` - Stacked toast notifications
//! - `contact_form.rs` - Contact form with validation and phone mask
//! - `back_to_top.rs` - Scroll-to-top control
//! - `cookie_banner.rs` - Cookie consent banner
//! - `stats_row.rs` - Animated stats counters
//! - `preloader.rs` - Startup preloader overlay
//! - `footer.rs` - Footer with year stamp
//!
//! Every component is independently instantiable, owns its widget
//! references and implements the [`Component`] interface so the
//! composition root can tear all of them down uniformly - no runtime
//! existence checks, no fallback paths.

mod back_to_top;
mod contact_form;
mod cookie_banner;
mod footer;
mod nav_menu;
mod preloader;
mod stats_row;
mod toast_stack;

pub use back_to_top::BackToTop;
pub use contact_form::ContactForm;
pub use cookie_banner::CookieBanner;
pub use footer::Footer;
pub use nav_menu::{NavLinks, NavMenu, NAV_SECTIONS};
pub use preloader::Preloader;
pub use stats_row::StatsRow;
pub use toast_stack::{ToastStack, TOAST_DURATION_MS};

/// Fixed capability interface every page component provides
///
/// The composition root depends on this interface alone when wiring
/// lifecycle: `widget` to mount the component, `teardown` to cancel its
/// outstanding timers before the window goes away.
pub trait Component {
    /// Root widget to mount into the page
    fn widget(&self) -> gtk4::Widget;

    /// Cancels outstanding timers and transient state
    ///
    /// Safe to call more than once. After teardown no scheduled callback
    /// of this component will fire.
    fn teardown(&self);
}
