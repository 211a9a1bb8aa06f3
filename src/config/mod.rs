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

//! Cookie-consent flag persistence.
//!
//! The page persists exactly one piece of state: a boolean consent flag
//! recording that the user acknowledged the cookie banner. It is stored as
//! the literal string `"true"` in a single file, created on first
//! acceptance, read on every launch, and never expires.
//!
//! Writes are atomic (temp-file-then-rename) so a crash mid-write can
//! never leave a corrupt flag behind. No other key is read or written.

use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Serialised form of an accepted consent flag
const CONSENT_ACCEPTED: &str = "true";

/// Default location of the consent flag file
pub const DEFAULT_CONSENT_PATH: &str = "~/.config/folio-shell/cookie-consent";

/// Errors that can occur while persisting the consent flag.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Flag directory cannot be created or written to.
    #[error("Consent directory not writable: {0}")]
    DirNotWritable(PathBuf),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stores the single persisted consent flag.
///
/// Reading is infallible by design: a missing or unreadable file simply
/// means "no consent yet", so the banner shows again. Only acceptance can
/// fail, and that failure is non-fatal to the page.
#[derive(Debug)]
pub struct ConsentStore {
    /// Path of the consent flag file.
    path: PathBuf,
}

impl ConsentStore {
    /// Creates a store backed by the given flag file.
    ///
    /// The parent directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DirNotWritable` if the parent directory cannot
    /// be created.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use folio_shell::config::ConsentStore;
    /// use std::path::PathBuf;
    ///
    /// let store = ConsentStore::new(PathBuf::from("/tmp/folio/cookie-consent"))?;
    /// assert!(!store.has_consent());
    /// # Ok::<(), folio_shell::config::ConfigError>(())
    /// ```
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|_| ConfigError::DirNotWritable(parent.to_path_buf()))?;
            }
        }

        Ok(Self { path })
    }

    /// Resolves the default flag path, expanding the leading tilde.
    pub fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(DEFAULT_CONSENT_PATH).as_ref())
    }

    /// Path of the flag file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the user has previously accepted.
    ///
    /// Missing file, unreadable file or any other content than the literal
    /// `"true"` all mean "no consent".
    pub fn has_consent(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|content| content.trim() == CONSENT_ACCEPTED)
            .unwrap_or(false)
    }

    /// Records acceptance durably.
    ///
    /// The flag is written atomically; on success every later
    /// `has_consent()` (including across sessions) returns true.
    pub fn accept(&self) -> Result<(), ConfigError> {
        let mut file = AtomicWriteFile::open(&self.path)
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
        file.write_all(CONSENT_ACCEPTED.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
        file.commit()
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    /// Removes the persisted flag, so the banner shows again next launch.
    pub fn reset(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
