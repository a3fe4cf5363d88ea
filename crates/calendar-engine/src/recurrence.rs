//! Recurring-day search and month-window enumeration.
//!
//! All searches are inclusive of the starting date and every sequence is
//! returned oldest first.
//!
//! Results are produced with chrono's date operators, which panic only when
//! the result leaves chrono's representable range (roughly ±262,000 years).

use chrono::{Datelike, Days, Duration, Months, NaiveDate};

use crate::weekday::{weekday_index, Day};

/// The first date on or after `from` that falls on `day`.
///
/// # Examples
///
/// ```
/// use calendar_engine::recurrence::next_occurrence;
/// use calendar_engine::Day;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();
/// let sunday = next_occurrence(Day::Sunday, monday);
/// assert_eq!(sunday, NaiveDate::from_ymd_opt(2025, 8, 17).unwrap());
/// ```
pub fn next_occurrence(day: Day, from: NaiveDate) -> NaiveDate {
    let target = i64::from(day.index());
    let start = i64::from(weekday_index(from));

    if target == start {
        return from;
    }

    let days_ahead = (target - start + 7) % 7;
    tracing::trace!(%day, %from, days_ahead, "next occurrence");
    from + Duration::days(days_ahead)
}

/// The last date on or before `from` that falls on `day`.
pub fn last_occurrence(day: Day, from: NaiveDate) -> NaiveDate {
    let target = i64::from(day.index());
    let start = i64::from(weekday_index(from));

    if target == start {
        return from;
    }

    let days_back = (start + 7 - target) % 7;
    tracing::trace!(%day, %from, days_back, "last occurrence");
    from - Duration::days(days_back)
}

/// The last `count` dates falling on `day`, ending at
/// [`last_occurrence`]`(day, from)`, one week apart, oldest first.
///
/// A `count` below 1 yields an empty sequence.
pub fn last_occurrences(day: Day, count: i32, from: NaiveDate) -> Vec<NaiveDate> {
    if count < 1 {
        return Vec::new();
    }

    let latest = last_occurrence(day, from);
    (0..count)
        .map(|i| latest - Duration::weeks(i64::from(count - 1 - i)))
        .collect()
}

/// The first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// First-of-month dates for the last `count` months up to and including the
/// month containing `from`, oldest first.
///
/// A `count` below 1 yields an empty sequence.
///
/// # Examples
///
/// ```
/// use calendar_engine::recurrence::last_month_starts;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// let months: Vec<String> = last_month_starts(3, from).iter().map(|d| d.to_string()).collect();
/// assert_eq!(months, ["2023-12-01", "2024-01-01", "2024-02-01"]);
/// ```
pub fn last_month_starts(count: i32, from: NaiveDate) -> Vec<NaiveDate> {
    if count < 1 {
        return Vec::new();
    }

    let latest = start_of_month(from);
    (0..count)
        .map(|i| latest - Months::new((count - 1 - i).unsigned_abs()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn iso(dates: &[NaiveDate]) -> Vec<String> {
        dates.iter().map(|d| d.to_string()).collect()
    }

    // ── next_occurrence ─────────────────────────────────────────────────

    #[test]
    fn test_next_occurrence_same_day_is_inclusive() {
        // Monday Aug 11, 2025
        let start = date(2025, 8, 11);
        assert_eq!(next_occurrence(Day::Monday, start), start);
    }

    #[test]
    fn test_next_occurrence_later_in_week() {
        let start = date(2025, 8, 11);
        assert_eq!(next_occurrence(Day::Tuesday, start), date(2025, 8, 12));
        assert_eq!(next_occurrence(Day::Sunday, start), date(2025, 8, 17));
    }

    #[test]
    fn test_next_occurrence_crosses_week() {
        // Tuesday Aug 12, 2025
        let start = date(2025, 8, 12);
        assert_eq!(next_occurrence(Day::Monday, start), date(2025, 8, 18));
        // Thursday Aug 14, 2025
        assert_eq!(next_occurrence(Day::Wednesday, date(2025, 8, 14)), date(2025, 8, 20));
    }

    #[test]
    fn test_next_occurrence_crosses_year() {
        // Saturday Dec 30, 2023 -> Monday Jan 1, 2024
        assert_eq!(next_occurrence(Day::Monday, date(2023, 12, 30)), date(2024, 1, 1));
    }

    // ── last_occurrence ─────────────────────────────────────────────────

    #[test]
    fn test_last_occurrence_same_day_is_inclusive() {
        // Wednesday Apr 10, 2024
        let start = date(2024, 4, 10);
        assert_eq!(last_occurrence(Day::Wednesday, start), start);
    }

    #[test]
    fn test_last_occurrence_earlier_in_week() {
        let start = date(2024, 4, 10);
        assert_eq!(last_occurrence(Day::Monday, start), date(2024, 4, 8));
        assert_eq!(last_occurrence(Day::Tuesday, start), date(2024, 4, 9));
        assert_eq!(last_occurrence(Day::Thursday, start), date(2024, 4, 4));
    }

    #[test]
    fn test_last_occurrence_week_boundary() {
        assert_eq!(last_occurrence(Day::Sunday, date(2024, 4, 10)), date(2024, 4, 7));
    }

    #[test]
    fn test_last_occurrence_crosses_leap_day() {
        // Friday Mar 1, 2024 -> Thursday Feb 29, 2024
        assert_eq!(last_occurrence(Day::Thursday, date(2024, 3, 1)), date(2024, 2, 29));
    }

    // ── last_occurrences ────────────────────────────────────────────────

    #[test]
    fn test_last_occurrences_single() {
        let start = date(2024, 4, 10);
        assert_eq!(iso(&last_occurrences(Day::Monday, 1, start)), ["2024-04-08"]);
        assert_eq!(iso(&last_occurrences(Day::Tuesday, 1, start)), ["2024-04-09"]);
        assert_eq!(iso(&last_occurrences(Day::Wednesday, 1, start)), ["2024-04-10"]);
    }

    #[test]
    fn test_last_occurrences_oldest_first() {
        let mondays = last_occurrences(Day::Monday, 3, date(2024, 4, 10));
        assert_eq!(iso(&mondays), ["2024-03-25", "2024-04-01", "2024-04-08"]);
    }

    #[test]
    fn test_last_occurrences_sunday_across_month() {
        let sundays = last_occurrences(Day::Sunday, 2, date(2024, 4, 10));
        assert_eq!(iso(&sundays), ["2024-03-31", "2024-04-07"]);
    }

    #[test]
    fn test_last_occurrences_non_positive_count_is_empty() {
        let start = date(2024, 4, 10);
        assert!(last_occurrences(Day::Monday, 0, start).is_empty());
        assert!(last_occurrences(Day::Monday, -1, start).is_empty());
    }

    // ── last_month_starts ───────────────────────────────────────────────

    #[test]
    fn test_last_month_starts_three_months() {
        let months = last_month_starts(3, date(2024, 5, 15));
        assert_eq!(iso(&months), ["2024-03-01", "2024-04-01", "2024-05-01"]);
    }

    #[test]
    fn test_last_month_starts_single_month() {
        assert_eq!(iso(&last_month_starts(1, date(2024, 5, 15))), ["2024-05-01"]);
    }

    #[test]
    fn test_last_month_starts_year_boundary() {
        let months = last_month_starts(4, date(2024, 2, 15));
        assert_eq!(
            iso(&months),
            ["2023-11-01", "2023-12-01", "2024-01-01", "2024-02-01"]
        );
    }

    #[test]
    fn test_last_month_starts_non_positive_count_is_empty() {
        assert!(last_month_starts(0, date(2024, 5, 15)).is_empty());
        assert!(last_month_starts(-3, date(2024, 5, 15)).is_empty());
    }

    #[test]
    fn test_last_month_starts_from_first_and_last_day() {
        let months = last_month_starts(3, date(2023, 8, 1));
        assert_eq!(iso(&months), ["2023-06-01", "2023-07-01", "2023-08-01"]);

        let months = last_month_starts(2, date(2024, 3, 31));
        assert_eq!(iso(&months), ["2024-02-01", "2024-03-01"]);
    }

    #[test]
    fn test_start_of_month() {
        assert_eq!(start_of_month(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(start_of_month(date(2024, 2, 1)), date(2024, 2, 1));
    }
}
