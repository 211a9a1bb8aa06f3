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

//! MVC Controller - mediates between Model (core logic, ConsentStore) and
//! View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Validate contact form submissions
//! - Guard the simulated submission against concurrent resubmits
//! - Own the transient navigation state (menu, header, active section)
//! - Read and persist the cookie-consent flag
//!
//! # Architecture
//!
//! The Controller holds Model state but doesn't know about GTK4 widgets.
//! This keeps business logic separate from presentation and lets the whole
//! submit/navigation lifecycle run in headless tests.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, ConsentStore};
use crate::core::scroll;
use crate::core::types::{ContactSubmission, NavState, SectionSpan, ValidationReport};
use crate::core::validator::validate_submission;

/// Delay standing in for the network round-trip of a real submission
pub const SUBMIT_DELAY_MS: u64 = 2000;

/// Toast shown when a submission completes
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! We'll be in touch shortly.";

/// Toast shown when the simulated delivery fails
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to send your message. Please try again.";

/// Errors in the submit lifecycle
#[derive(Debug, Error, PartialEq)]
pub enum SubmissionError {
    /// A submission is already in flight; resubmits are rejected until it
    /// completes
    #[error("A submission is already in progress")]
    AlreadyPending,

    /// The (simulated) delivery failed
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Scroll-derived view state for one scroll position
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    /// Header should carry the "scrolled" class
    pub header_scrolled: bool,
    /// Back-to-top control should be visible
    pub back_to_top_visible: bool,
    /// Nav link to mark active, if any
    pub active_section_id: Option<String>,
}

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// Persisted consent flag store
    consent: ConsentStore,
    /// Transient navigation state
    nav_state: RefCell<NavState>,
    /// True while a (simulated) submission is in flight
    submission_pending: Cell<bool>,
}

impl Controller {
    /// Creates a new Controller with the consent flag at the given path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the consent directory cannot be created.
    pub fn new(consent_path: PathBuf) -> Result<Self, ConfigError> {
        let consent = ConsentStore::new(consent_path)?;

        Ok(Self {
            consent,
            nav_state: RefCell::new(NavState::default()),
            submission_pending: Cell::new(false),
        })
    }

    // ------------------------------------------------------------------
    // Form handling
    // ------------------------------------------------------------------

    /// Validates a submission; failures are in field order
    pub fn validate(&self, submission: &ContactSubmission) -> ValidationReport {
        validate_submission(submission)
    }

    /// Marks a submission as in flight
    ///
    /// Rejects the attempt when one is already pending, so a double-click
    /// on the submit button cannot start two deliveries.
    pub fn begin_submission(&self) -> Result<(), SubmissionError> {
        if self.submission_pending.get() {
            return Err(SubmissionError::AlreadyPending);
        }
        self.submission_pending.set(true);
        Ok(())
    }

    /// Completes the in-flight submission
    ///
    /// The pending flag is cleared FIRST, unconditionally, so the form is
    /// usable again whatever the outcome - the finally-equivalent step of
    /// the submit lifecycle. The actual delivery is simulated: the payload
    /// is logged and the call succeeds.
    pub fn complete_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), SubmissionError> {
        self.submission_pending.set(false);

        // A real backend would POST here; this core only simulates it.
        eprintln!(
            "📨 Submission from {} <{}> (subject: {})",
            submission.name, submission.email, submission.subject
        );

        Ok(())
    }

    /// True while a submission is in flight
    pub fn submission_pending(&self) -> bool {
        self.submission_pending.get()
    }

    // ------------------------------------------------------------------
    // Navigation state
    // ------------------------------------------------------------------

    /// Opens the menu; returns false when it was already open
    pub fn open_menu(&self) -> bool {
        let mut state = self.nav_state.borrow_mut();
        let changed = !state.menu_open;
        state.menu_open = true;
        changed
    }

    /// Closes the menu; returns false when it was already closed
    pub fn close_menu(&self) -> bool {
        let mut state = self.nav_state.borrow_mut();
        let changed = state.menu_open;
        state.menu_open = false;
        changed
    }

    /// Flips the menu; returns the new open state
    pub fn toggle_menu(&self) -> bool {
        let mut state = self.nav_state.borrow_mut();
        state.menu_open = !state.menu_open;
        state.menu_open
    }

    /// Whether the menu is currently open
    pub fn menu_open(&self) -> bool {
        self.nav_state.borrow().menu_open
    }

    /// Recomputes scroll-derived state for the given offset
    ///
    /// Called on every scroll change and once at init. Stores the result
    /// in the navigation state and returns it for the view to apply.
    pub fn sync_scroll(&self, scroll_y: f64, sections: &[SectionSpan]) -> ScrollUpdate {
        let update = ScrollUpdate {
            header_scrolled: scroll::header_scrolled(scroll_y),
            back_to_top_visible: scroll::back_to_top_visible(scroll_y),
            active_section_id: scroll::active_section(scroll_y, sections).map(String::from),
        };

        let mut state = self.nav_state.borrow_mut();
        state.header_scrolled = update.header_scrolled;
        state.active_section_id = update.active_section_id.clone();

        update
    }

    /// Snapshot of the current navigation state
    pub fn nav_state(&self) -> NavState {
        self.nav_state.borrow().clone()
    }

    // ------------------------------------------------------------------
    // Consent flag
    // ------------------------------------------------------------------

    /// Whether the cookie banner was accepted in any earlier session
    pub fn has_consent(&self) -> bool {
        self.consent.has_consent()
    }

    /// Persists the consent flag
    pub fn accept_consent(&self) -> Result<(), ConfigError> {
        self.consent.accept()
    }
}
