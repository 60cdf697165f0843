//! Habits and the tracker that owns them.
//!
//! A [`Habit`] is a named activity plus the set of days it was done. The
//! [`HabitTracker`] keeps at most one habit per name and answers completion
//! and streak queries for a given date.
//!
//! Operations on a name the tracker does not know are benign: mutations do
//! nothing and queries answer `false`, `None` or `0`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut tracker = HabitTracker::new();
//! tracker.add("Yoga")?;
//! tracker.mark_complete("Yoga", today);
//! let streak = tracker.current_streak("Yoga", today);
//! ```

pub mod streak;

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::error::ValidationError;

/// A single tracked habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    name: String,
    completions: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Create a habit with no completions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_completions(name, BTreeSet::new())
    }

    /// Rebuild a habit with existing completions (used when loading data).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if `name` is empty.
    pub fn with_completions(
        name: impl Into<String>,
        completions: impl IntoIterator<Item = NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_habit_name());
        }
        Ok(Self {
            name,
            completions: completions.into_iter().collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Completed days in ascending order.
    pub fn completions(&self) -> &BTreeSet<NaiveDate> {
        &self.completions
    }

    pub fn is_complete_on(&self, date: NaiveDate) -> bool {
        self.completions.contains(&date)
    }

    pub fn current_streak(&self, reference: NaiveDate) -> u32 {
        streak::current_streak(&self.completions, reference)
    }

    fn mark(&mut self, date: NaiveDate) {
        self.completions.insert(date);
    }

    fn unmark(&mut self, date: NaiveDate) {
        self.completions.remove(&date);
    }

    pub(crate) fn merge(&mut self, other: Habit) {
        self.completions.extend(other.completions);
    }
}

/// The collection of habits and the business rules over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitTracker {
    habits: Vec<Habit>,
}

impl HabitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new habit with no completions.
    ///
    /// Returns `Ok(false)` without touching the tracker when a habit with
    /// exactly this name already exists.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArgument`] if `name` is empty.
    pub fn add(&mut self, name: &str) -> Result<bool, ValidationError> {
        if self.get(name).is_some() {
            tracing::debug!(habit = name, "habit already exists");
            return Ok(false);
        }
        self.habits.push(Habit::new(name)?);
        tracing::debug!(habit = name, "habit added");
        Ok(true)
    }

    /// Insert an already-built habit, merging completions on a name clash.
    pub(crate) fn insert(&mut self, habit: Habit) {
        match self.get_mut(habit.name()) {
            Some(existing) => {
                tracing::warn!(habit = habit.name(), "duplicate habit merged");
                existing.merge(habit);
            }
            None => self.habits.push(habit),
        }
    }

    /// Remove the habit with this name. Absent names are ignored.
    pub fn delete(&mut self, name: &str) {
        let before = self.habits.len();
        self.habits.retain(|h| h.name != name);
        if self.habits.len() != before {
            tracing::debug!(habit = name, "habit deleted");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.name == name)
    }

    /// Mark `name` as done on `date`. Idempotent; no-op for unknown names.
    pub fn mark_complete(&mut self, name: &str, date: NaiveDate) {
        if let Some(habit) = self.get_mut(name) {
            habit.mark(date);
            tracing::debug!(habit = name, %date, "marked complete");
        }
    }

    /// Clear the completion of `name` on `date`, if there is one.
    pub fn mark_incomplete(&mut self, name: &str, date: NaiveDate) {
        if let Some(habit) = self.get_mut(name) {
            habit.unmark(date);
            tracing::debug!(habit = name, %date, "marked incomplete");
        }
    }

    /// Flip completion of `name` on `date`.
    ///
    /// Returns the new state, or `None` when the habit does not exist.
    pub fn toggle(&mut self, name: &str, date: NaiveDate) -> Option<bool> {
        let done = self.get(name)?.is_complete_on(date);
        if done {
            self.mark_incomplete(name, date);
        } else {
            self.mark_complete(name, date);
        }
        Some(!done)
    }

    pub fn is_complete_on(&self, name: &str, date: NaiveDate) -> bool {
        self.get(name).is_some_and(|h| h.is_complete_on(date))
    }

    /// Streak of `name` as seen on `reference`; 0 for unknown names.
    pub fn current_streak(&self, name: &str, reference: NaiveDate) -> u32 {
        self.get(name).map_or(0, |h| h.current_streak(reference))
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Habits in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter()
    }

    /// Habits in display order (by name).
    pub fn sorted_by_name(&self) -> Vec<&Habit> {
        let mut habits: Vec<&Habit> = self.habits.iter().collect();
        habits.sort_by(|a, b| a.name.cmp(&b.name));
        habits
    }
}
