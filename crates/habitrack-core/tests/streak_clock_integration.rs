//! Integration tests for streaks seen through the app clock.

use chrono::{Duration, NaiveDate};
use habitrack_core::{AppClock, DaySnapshot, FixedClock, HabitTracker};
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_streak_follows_app_date_navigation() {
    let mut tracker = HabitTracker::new();
    tracker.add("Yoga").unwrap();
    tracker.mark_complete("Yoga", d(2025, 6, 28));
    tracker.mark_complete("Yoga", d(2025, 6, 29));
    tracker.mark_complete("Yoga", d(2025, 6, 30));

    let mut clock = AppClock::new(FixedClock::new(d(2025, 7, 2)));

    clock.set(d(2025, 6, 30));
    assert_eq!(tracker.current_streak("Yoga", clock.current()), 3);

    clock.advance();
    assert_eq!(clock.current(), d(2025, 7, 1));
    assert_eq!(tracker.current_streak("Yoga", clock.current()), 3);

    clock.advance();
    assert_eq!(clock.current(), d(2025, 7, 2));
    assert_eq!(tracker.current_streak("Yoga", clock.current()), 0);

    clock.advance();
    assert_eq!(clock.current(), d(2025, 7, 2));
}

#[test]
fn test_retroactive_logging_after_rewind() {
    let mut tracker = HabitTracker::new();
    tracker.add("Read").unwrap();
    let mut clock = AppClock::new(FixedClock::new(d(2025, 7, 2)));

    tracker.mark_complete("Read", clock.current());
    clock.rewind();
    tracker.mark_complete("Read", clock.current());
    clock.rewind();
    tracker.mark_complete("Read", clock.current());
    clock.reset();

    assert_eq!(tracker.current_streak("Read", clock.current()), 3);
    let snapshot = DaySnapshot::capture(&clock, &tracker);
    assert!(snapshot.is_today);
    assert_eq!(snapshot.habits[0].streak, 3);
    assert!(snapshot.habits[0].completed);
}

#[test]
fn test_streak_across_month_boundary() {
    let mut tracker = HabitTracker::new();
    tracker.add("Meditate").unwrap();
    tracker.mark_complete("Meditate", d(2025, 5, 30));
    tracker.mark_complete("Meditate", d(2025, 5, 31));
    assert_eq!(tracker.current_streak("Meditate", d(2025, 6, 1)), 2);
    tracker.mark_complete("Meditate", d(2025, 6, 1));
    assert_eq!(tracker.current_streak("Meditate", d(2025, 6, 1)), 3);
}

#[derive(Debug, Clone)]
enum ClockOp {
    Advance,
    Rewind,
    Reset,
    Set(i64),
}

fn clock_op() -> impl Strategy<Value = ClockOp> {
    prop_oneof![
        Just(ClockOp::Advance),
        Just(ClockOp::Rewind),
        Just(ClockOp::Reset),
        (-400i64..400).prop_map(ClockOp::Set),
    ]
}

proptest! {
    #[test]
    fn prop_streak_equals_length_of_run(
        offset in 0i64..40_000,
        run in 1u32..60,
        older in proptest::collection::vec(1i64..200, 0..20),
    ) {
        let reference = d(1970, 1, 1) + Duration::days(offset);
        let mut tracker = HabitTracker::new();
        tracker.add("Habit").unwrap();
        for back in 0..i64::from(run) {
            tracker.mark_complete("Habit", reference - Duration::days(back));
        }
        // Anything strictly before the gap at reference - run.
        for extra in older {
            tracker.mark_complete("Habit", reference - Duration::days(i64::from(run) + extra));
        }

        prop_assert_eq!(tracker.current_streak("Habit", reference), run);
        // The day after, not yet done, still shows the same run.
        prop_assert_eq!(tracker.current_streak("Habit", reference + Duration::days(1)), run);
    }

    #[test]
    fn prop_app_clock_never_passes_real_today(ops in proptest::collection::vec(clock_op(), 0..50)) {
        let today = d(2025, 7, 2);
        let mut clock = AppClock::new(FixedClock::new(today));
        for op in ops {
            match op {
                ClockOp::Advance => clock.advance(),
                ClockOp::Rewind => clock.rewind(),
                ClockOp::Reset => clock.reset(),
                ClockOp::Set(days) => clock.set(today + Duration::days(days)),
            }
            prop_assert!(clock.current() <= clock.real_today());
        }
    }

    #[test]
    fn prop_mark_then_unmark_is_identity(
        existing in proptest::collection::btree_set(0i64..30, 0..10),
        target in 0i64..30,
    ) {
        let base = d(2025, 1, 1);
        let mut tracker = HabitTracker::new();
        tracker.add("Habit").unwrap();
        for day in &existing {
            tracker.mark_complete("Habit", base + Duration::days(*day));
        }
        prop_assume!(!existing.contains(&target));
        let before = tracker.clone();

        tracker.mark_complete("Habit", base + Duration::days(target));
        tracker.mark_complete("Habit", base + Duration::days(target));
        tracker.mark_incomplete("Habit", base + Duration::days(target));
        prop_assert_eq!(tracker, before);
    }
}
