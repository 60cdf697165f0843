//! What a front end needs to draw one day.
//!
//! A [`DaySnapshot`] joins the app clock and the tracker: the date being
//! viewed, the state of the date navigation controls, and every habit (by
//! name) with its completion and streak on that date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::clock::{AppClock, Clock};
use crate::events::Event;
use crate::habit::HabitTracker;

/// One habit row as seen on the snapshot date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStatus {
    pub name: String,
    pub completed: bool,
    pub streak: u32,
}

/// The state of a single day, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub is_today: bool,
    pub can_advance: bool,
    /// Sorted by name.
    pub habits: Vec<HabitStatus>,
}

impl DaySnapshot {
    pub fn capture<C: Clock>(clock: &AppClock<C>, tracker: &HabitTracker) -> Self {
        let date = clock.current();
        let habits = tracker
            .sorted_by_name()
            .into_iter()
            .map(|habit| HabitStatus {
                name: habit.name().to_string(),
                completed: habit.is_complete_on(date),
                streak: habit.current_streak(date),
            })
            .collect();
        Self {
            date,
            is_today: clock.is_today(),
            can_advance: clock.can_advance(),
            habits,
        }
    }
}

/// The event describing where the clock now stands.
pub fn date_event<C: Clock>(clock: &AppClock<C>) -> Event {
    Event::AppDateChanged {
        date: clock.current(),
        is_today: clock.is_today(),
        can_advance: clock.can_advance(),
    }
}

/// Format `date` with a strftime pattern, falling back to ISO-8601 when the
/// pattern cannot be rendered.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.to_string();
    }
    out
}
