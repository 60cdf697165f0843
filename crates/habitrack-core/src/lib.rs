//! # habitrack Core Library
//!
//! This library provides the core business logic for the habitrack habit
//! tracker. All operations are available through the standalone CLI binary;
//! any other front end is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Habits**: the habit collection, per-day completion and streaks
//! - **App Clock**: a virtual "today" the user can move backward and
//!   forward, never past the real date
//! - **Storage**: JSON habit and session files and TOML configuration
//! - **Snapshot**: the per-day view a front end renders
//!
//! ## Key Components
//!
//! - [`HabitTracker`]: Habit collection and streak rules
//! - [`AppClock`]: Current application date state machine
//! - [`HabitFile`]: Habit persistence
//! - [`Config`]: Application configuration management
//!
//! The core is single-threaded and holds no global state. Hosts that share a
//! tracker or clock across threads must serialize access themselves.

pub mod clock;
pub mod error;
pub mod events;
pub mod habit;
pub mod snapshot;
pub mod storage;

pub use clock::{AppClock, Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use habit::{Habit, HabitTracker};
pub use snapshot::{DaySnapshot, HabitStatus};
pub use storage::{Config, HabitFile, SessionFile};
