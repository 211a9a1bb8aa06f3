//! UI Builders
//!
//! Page construction, split by concern:
//!
//! - `header.rs` - Fixed header bar with brand, inline links and menu toggle
//! - `layout.rs` - Scrollable page body: sections, stats row, form, footer
//! - `handlers.rs` - Event wiring between widgets and the Controller

pub mod handlers;
pub mod header;
pub mod layout;
