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

use crate::config::ConsentStore;
use std::fs;
use tempfile::TempDir;

/// Helper: creates a store in a fresh temporary directory
fn create_test_store() -> (TempDir, ConsentStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cookie-consent");
    let store = ConsentStore::new(path).unwrap();
    (temp_dir, store)
}

#[test]
fn test_no_consent_before_first_acceptance() {
    let (_temp_dir, store) = create_test_store();
    assert!(!store.has_consent(), "Fresh store must report no consent");
}

#[test]
fn test_accept_persists_the_literal_true() {
    let (_temp_dir, store) = create_test_store();

    store.accept().unwrap();

    assert!(store.has_consent());
    let on_disk = fs::read_to_string(store.path()).unwrap();
    assert_eq!(on_disk, "true", "Flag must be the literal string \"true\"");
}

#[test]
fn test_consent_survives_across_store_instances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cookie-consent");

    ConsentStore::new(path.clone()).unwrap().accept().unwrap();

    // A second instance, as on the next launch
    let reopened = ConsentStore::new(path).unwrap();
    assert!(reopened.has_consent(), "Flag must be durable across sessions");
}

#[test]
fn test_other_content_is_not_consent() {
    let (_temp_dir, store) = create_test_store();
    fs::write(store.path(), "yes please").unwrap();
    assert!(!store.has_consent());

    fs::write(store.path(), "false").unwrap();
    assert!(!store.has_consent());
}

#[test]
fn test_trailing_whitespace_is_tolerated() {
    let (_temp_dir, store) = create_test_store();
    fs::write(store.path(), "true\n").unwrap();
    assert!(store.has_consent());
}

#[test]
fn test_reset_clears_the_flag() {
    let (_temp_dir, store) = create_test_store();
    store.accept().unwrap();
    assert!(store.has_consent());

    store.reset().unwrap();
    assert!(!store.has_consent());
    assert!(!store.path().exists());

    // Resetting an already clean store is fine
    store.reset().unwrap();
}

#[test]
fn test_parent_directory_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("deep/nested/cookie-consent");

    let store = ConsentStore::new(nested).unwrap();
    store.accept().unwrap();
    assert!(store.has_consent());
}
