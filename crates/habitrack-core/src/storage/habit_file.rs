//! JSON persistence for the habit collection.
//!
//! File layout:
//!
//! ```json
//! {
//!   "habits": [
//!     { "name": "Yoga", "completions": ["2025-06-28", "2025-06-29"] }
//!   ]
//! }
//! ```
//!
//! Loading never fails because the file is missing or is not valid JSON; both
//! yield an empty tracker. A document that parses as JSON but has the wrong
//! shape, a bad date or an empty name is a data error and is returned to the
//! caller, so the file is never overwritten with less than it held.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::habit::{Habit, HabitTracker};

/// One habit as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub name: String,
    /// ISO-8601 calendar dates (`YYYY-MM-DD`).
    #[serde(default)]
    pub completions: Vec<String>,
}

/// Top-level document of the habit file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitsDocument {
    #[serde(default)]
    pub habits: Vec<HabitRecord>,
}

impl HabitsDocument {
    pub fn from_tracker(tracker: &HabitTracker) -> Self {
        let habits = tracker
            .iter()
            .map(|habit| HabitRecord {
                name: habit.name().to_string(),
                completions: habit.completions().iter().map(ToString::to_string).collect(),
            })
            .collect();
        Self { habits }
    }

    /// Rebuild a tracker. Records sharing a name are merged.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidDate`] for an unparseable date and
    /// [`StorageError::InvalidRecord`] for an empty name.
    pub fn into_tracker(self) -> Result<HabitTracker, StorageError> {
        let mut tracker = HabitTracker::new();
        for record in self.habits {
            let completions = record
                .completions
                .iter()
                .map(|value| {
                    value
                        .parse::<NaiveDate>()
                        .map_err(|source| StorageError::InvalidDate {
                            habit: record.name.clone(),
                            value: value.clone(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            tracker.insert(Habit::with_completions(record.name, completions)?);
        }
        Ok(tracker)
    }
}

/// The habit file on disk.
#[derive(Debug, Clone)]
pub struct HabitFile {
    path: PathBuf,
}

impl HabitFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the tracker, recovering from a missing, unreadable or truncated file.
    ///
    /// # Errors
    /// Returns [`StorageError::MalformedRecord`] when the JSON has the wrong
    /// shape, and [`StorageError::InvalidDate`] or
    /// [`StorageError::InvalidRecord`] when a record holds invalid data.
    pub fn load(&self) -> Result<HabitTracker, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no habit file, starting empty");
                return Ok(HabitTracker::new());
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "habit file unreadable, starting empty");
                return Ok(HabitTracker::new());
            }
        };

        let document: HabitsDocument = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(err) if matches!(err.classify(), Category::Syntax | Category::Eof) => {
                tracing::warn!(path = %self.path.display(), error = %err, "habit file corrupt, starting empty");
                return Ok(HabitTracker::new());
            }
            Err(source) => {
                return Err(StorageError::MalformedRecord {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let tracker = document.into_tracker()?;
        tracing::debug!(path = %self.path.display(), habits = tracker.len(), "habits loaded");
        Ok(tracker)
    }

    /// Write the whole tracker, creating the parent directory if needed.
    ///
    /// # Errors
    /// Returns [`StorageError::WriteFailed`] if the file cannot be written.
    pub fn save(&self, tracker: &HabitTracker) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&HabitsDocument::from_tracker(tracker))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), habits = tracker.len(), "habits saved");
        Ok(())
    }
}
