// ABOUTME: Session-token persistence in local device storage under a fixed key
// ABOUTME: Load/store/clear of the opaque access token gating authenticated flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

//! Session persistence
//!
//! The auth service issues an opaque access token which the client keeps in
//! a small JSON file under the platform data directory, keyed by the same
//! fixed name the mobile app used in its device storage (`userToken`).
//! The store is explicit, injected state — there is no ambient global
//! session context.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use formcoach_services::auth::SessionToken;
use formcoach_services::constants::storage;
use formcoach_services::errors::{CoachError, CoachResult};

/// File-backed session token store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by a file in the platform data directory
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Storage`] when no platform data directory can
    /// be resolved.
    pub fn in_data_dir() -> CoachResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| CoachError::Storage("no platform data directory".to_owned()))?;
        Ok(Self::at_path(
            base.join(storage::APP_DIR).join("session.json"),
        ))
    }

    /// Store backed by an explicit file path
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted token, if any
    ///
    /// A missing file means no session; a corrupt file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Storage`] when the file exists but cannot be
    /// read, and [`CoachError::Serialization`] when it cannot be parsed.
    pub fn load(&self) -> CoachResult<Option<SessionToken>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(CoachError::Storage(format!("read session file: {err}"))),
        };
        let entries: HashMap<String, String> =
            serde_json::from_str(&contents).map_err(|err| CoachError::Serialization {
                context: "session file",
                source: err,
            })?;
        Ok(entries
            .get(storage::SESSION_TOKEN_KEY)
            .map(SessionToken::new))
    }

    /// Persist a token, replacing any previous session
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Storage`] when the file cannot be written,
    /// and [`CoachError::Serialization`] when the entry cannot be encoded.
    pub fn store(&self, token: &SessionToken) -> CoachResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| CoachError::Storage(format!("create session dir: {err}")))?;
        }
        let entries =
            HashMap::from([(storage::SESSION_TOKEN_KEY.to_owned(), token.as_str().to_owned())]);
        let contents =
            serde_json::to_string_pretty(&entries).map_err(|err| CoachError::Serialization {
                context: "session file",
                source: err,
            })?;
        fs::write(&self.path, contents)
            .map_err(|err| CoachError::Storage(format!("write session file: {err}")))?;
        debug!(path = %self.path.display(), "session token stored");
        Ok(())
    }

    /// Remove any persisted session
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Storage`] when the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> CoachResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CoachError::Storage(format!("remove session file: {err}"))),
        }
    }
}
