//! Consecutive-day streak counting.
//!
//! A streak is the run of completed days ending at the reference date. When
//! the reference date itself has not been completed yet, the run ending the
//! day before is reported instead, so an unfinished "today" never zeroes a
//! streak that is still alive. It does not count toward it either.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Length of the run of consecutive completed days ending at `start`.
///
/// Walks backward one day at a time and stops at the first day that is not
/// in `completions`. Returns 0 when `start` itself is absent.
pub fn run_ending_at(completions: &BTreeSet<NaiveDate>, start: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = Some(start);
    while let Some(current) = day.filter(|d| completions.contains(d)) {
        count += 1;
        day = current.pred_opt();
    }
    count
}

/// Current streak as seen on `reference`.
///
/// Counts from `reference` when it is completed, otherwise from the day
/// before it.
pub fn current_streak(completions: &BTreeSet<NaiveDate>, reference: NaiveDate) -> u32 {
    let start = if completions.contains(&reference) {
        Some(reference)
    } else {
        reference.pred_opt()
    };
    start.map_or(0, |day| run_ending_at(completions, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn set(days: &[NaiveDate]) -> BTreeSet<NaiveDate> {
        days.iter().copied().collect()
    }

    #[test]
    fn test_run_stops_at_first_gap() {
        let today = d(2025, 6, 9);
        let completions = set(&[today, today - Duration::days(1), today - Duration::days(3)]);
        assert_eq!(run_ending_at(&completions, today), 2);
    }

    #[test]
    fn test_run_from_absent_day_is_zero() {
        let completions = set(&[d(2025, 6, 8)]);
        assert_eq!(run_ending_at(&completions, d(2025, 6, 9)), 0);
    }

    #[test]
    fn test_streak_counts_reference_when_completed() {
        let today = d(2025, 6, 9);
        let completions = set(&[today, d(2025, 6, 8), d(2025, 6, 7)]);
        assert_eq!(current_streak(&completions, today), 3);
    }

    #[test]
    fn test_streak_peeks_at_yesterday() {
        let completions = set(&[d(2025, 6, 8), d(2025, 6, 7)]);
        assert_eq!(current_streak(&completions, d(2025, 6, 9)), 2);
    }

    #[test]
    fn test_streak_zero_after_two_day_gap() {
        let completions = set(&[d(2025, 6, 7)]);
        assert_eq!(current_streak(&completions, d(2025, 6, 9)), 0);
    }

    #[test]
    fn test_streak_empty_completions() {
        assert_eq!(current_streak(&BTreeSet::new(), d(2025, 6, 9)), 0);
    }

    #[test]
    fn test_streak_crosses_month_and_year_boundaries() {
        let completions = set(&[d(2025, 1, 1), d(2024, 12, 31), d(2024, 12, 30)]);
        assert_eq!(current_streak(&completions, d(2025, 1, 1)), 3);
        assert_eq!(current_streak(&completions, d(2025, 1, 2)), 3);
    }

    #[test]
    fn test_streak_crosses_leap_day() {
        let completions = set(&[d(2024, 3, 1), d(2024, 2, 29), d(2024, 2, 28)]);
        assert_eq!(current_streak(&completions, d(2024, 3, 1)), 3);
    }

    #[test]
    fn test_streak_terminates_at_minimum_date() {
        let completions = set(&[NaiveDate::MIN]);
        assert_eq!(current_streak(&completions, NaiveDate::MIN), 1);
        assert_eq!(current_streak(&BTreeSet::new(), NaiveDate::MIN), 0);
    }
}
