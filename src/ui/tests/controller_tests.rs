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

use crate::core::types::{ContactSubmission, SectionSpan, ValidationError};
use crate::ui::controller::{Controller, SubmissionError};
use tempfile::TempDir;

/// Helper: controller with its consent flag in a temp dir
fn create_test_controller() -> (TempDir, Controller) {
    let temp_dir = TempDir::new().unwrap();
    let controller = Controller::new(temp_dir.path().join("cookie-consent")).unwrap();
    (temp_dir, controller)
}

fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: None,
        subject: "Consultation".to_string(),
        message: "I'd like to schedule an initial consultation.".to_string(),
    }
}

#[test]
fn test_controller_creation() {
    let (_temp_dir, controller) = create_test_controller();
    assert!(!controller.menu_open());
    assert!(!controller.submission_pending());
    assert!(!controller.has_consent());
}

#[test]
fn test_validation_surfaces_first_error() {
    let (_temp_dir, controller) = create_test_controller();

    let mut submission = valid_submission();
    submission.name = "Jo".to_string();
    submission.email = "bad".to_string();

    let report = controller.validate(&submission);
    assert_eq!(report.first_error(), Some(&ValidationError::NameTooShort));
}

#[test]
fn test_submission_pending_guard() {
    let (_temp_dir, controller) = create_test_controller();

    assert!(controller.begin_submission().is_ok());
    assert!(controller.submission_pending());

    // Resubmitting while one is in flight is rejected
    assert_eq!(
        controller.begin_submission(),
        Err(SubmissionError::AlreadyPending)
    );
}

#[test]
fn test_completion_clears_pending_flag() {
    let (_temp_dir, controller) = create_test_controller();

    controller.begin_submission().unwrap();
    controller.complete_submission(&valid_submission()).unwrap();

    assert!(!controller.submission_pending());
    // The next submission can start
    assert!(controller.begin_submission().is_ok());
}

#[test]
fn test_menu_transitions() {
    let (_temp_dir, controller) = create_test_controller();

    assert!(controller.open_menu(), "First open changes state");
    assert!(controller.menu_open());
    assert!(!controller.open_menu(), "Opening twice is a no-op");

    assert!(controller.close_menu());
    assert!(!controller.menu_open());
    assert!(!controller.close_menu(), "Closing twice is a no-op");

    assert!(controller.toggle_menu(), "Toggle from closed opens");
    assert!(!controller.toggle_menu(), "Toggle from open closes");
}

#[test]
fn test_sync_scroll_updates_nav_state() {
    let (_temp_dir, controller) = create_test_controller();

    let sections = vec![
        SectionSpan::new("home", 0.0, 800.0),
        SectionSpan::new("about", 800.0, 600.0),
    ];

    let update = controller.sync_scroll(0.0, &sections);
    assert!(!update.header_scrolled);
    assert!(!update.back_to_top_visible);
    assert_eq!(update.active_section_id.as_deref(), Some("home"));

    let update = controller.sync_scroll(900.0, &sections);
    assert!(update.header_scrolled);
    assert!(update.back_to_top_visible);
    assert_eq!(update.active_section_id.as_deref(), Some("about"));

    let state = controller.nav_state();
    assert!(state.header_scrolled);
    assert_eq!(state.active_section_id.as_deref(), Some("about"));
}

#[test]
fn test_consent_round_trip() {
    let (_temp_dir, controller) = create_test_controller();

    assert!(!controller.has_consent());
    controller.accept_consent().unwrap();
    assert!(controller.has_consent());
}
