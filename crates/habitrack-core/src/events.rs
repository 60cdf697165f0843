//! Events describing user actions and their outcomes.
//!
//! Serialized with a snake_case `type` tag for JSON output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every user action that changes state produces an Event.
/// Front ends print or forward them; nothing in the core consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    HabitAdded {
        name: String,
    },
    /// `add` was refused because the name is taken.
    HabitExists {
        name: String,
    },
    HabitDeleted {
        name: String,
    },
    CompletionChanged {
        name: String,
        date: NaiveDate,
        completed: bool,
        streak: u32,
    },
    /// The action named a habit that does not exist.
    HabitMissing {
        name: String,
    },
    AppDateChanged {
        date: NaiveDate,
        is_today: bool,
        can_advance: bool,
    },
}
