//! Persisted app date between short-lived processes.
//!
//! A GUI keeps its `AppClock` alive for the whole session; a CLI invocation
//! does not, so the current app date is written here after navigation and
//! restored on the next run. Restoring goes through [`AppClock::set`], so a
//! stored date that is now in the future is clamped like any other.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::clock::{AppClock, Clock};
use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SessionState {
    current_date: NaiveDate,
}

/// The session file on disk.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the stored date into `clock`.
    ///
    /// Leaves the clock on the real current date when there is nothing
    /// usable on disk. Returns whether a date was restored.
    pub fn restore<C: Clock>(&self, clock: &mut AppClock<C>) -> bool {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return false;
        };
        match serde_json::from_str::<SessionState>(&content) {
            Ok(state) => {
                clock.set(state.current_date);
                true
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "session file corrupt, using today");
                false
            }
        }
    }

    /// Store the clock's current date.
    ///
    /// # Errors
    /// Returns [`StorageError::WriteFailed`] if the file cannot be written.
    pub fn save<C: Clock>(&self, clock: &AppClock<C>) -> Result<(), StorageError> {
        let state = SessionState {
            current_date: clock.current(),
        };
        let content = serde_json::to_string_pretty(&state)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
