//! The application's virtual "today".
//!
//! `AppClock` is a small state machine over a single date. The user can move
//! it backward freely and forward up to the real current date, which is read
//! from the injected [`Clock`] on every transition.
//!
//! ## Transitions
//!
//! ```text
//! set(d)   -> min(d, today)
//! advance  -> current + 1   (current < today)
//!          -> today         (current > today, real clock moved back)
//!          -> unchanged     (current == today)
//! rewind   -> current - 1   (no lower bound)
//! reset    -> today
//! ```

use chrono::NaiveDate;
use std::fmt;

use super::source::{Clock, SystemClock};

/// Current application date, never later than the real date.
pub struct AppClock<C = SystemClock> {
    clock: C,
    current: NaiveDate,
}

impl AppClock<SystemClock> {
    /// An app clock driven by the local wall clock.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> AppClock<C> {
    /// Create an app clock starting on the real current date.
    pub fn new(clock: C) -> Self {
        let current = clock.today();
        Self { clock, current }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    /// The real current date as reported by the underlying clock.
    pub fn real_today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Whether `advance` would move the date forward.
    pub fn can_advance(&self) -> bool {
        self.current < self.real_today()
    }

    pub fn is_today(&self) -> bool {
        self.current == self.real_today()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Jump to `date`, clamped to the real current date.
    pub fn set(&mut self, date: NaiveDate) {
        let today = self.real_today();
        self.current = date.min(today);
        tracing::debug!(requested = %date, current = %self.current, "app date set");
    }

    /// Move one day forward, never past the real current date.
    pub fn advance(&mut self) {
        let today = self.real_today();
        if self.current < today {
            if let Some(next) = self.current.succ_opt() {
                self.current = next;
            }
        } else if self.current > today {
            self.current = today;
        }
        tracing::debug!(current = %self.current, "app date advanced");
    }

    /// Move one day back.
    pub fn rewind(&mut self) {
        if let Some(prev) = self.current.pred_opt() {
            self.current = prev;
        }
        tracing::debug!(current = %self.current, "app date rewound");
    }

    /// Return to the real current date.
    pub fn reset(&mut self) {
        self.current = self.real_today();
        tracing::debug!(current = %self.current, "app date reset");
    }
}

impl Default for AppClock<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C> fmt::Debug for AppClock<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppClock")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
