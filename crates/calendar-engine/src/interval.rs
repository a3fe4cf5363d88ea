//! Time-range overlap, duration-bounded date comparison, and week spans.

use chrono::{Days, Months, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::clock::{civil_midnight, parse_timezone};
use crate::error::CalendarError;
use crate::options::CalendarOptions;

const MS_PER_WEEK: i64 = 7 * 24 * 60 * 60 * 1000;

// ── Time ranges ─────────────────────────────────────────────────────────────

/// Whether the time ranges `start1..end1` and `start2..end2` overlap.
///
/// Both comparisons are strict, so ranges that only touch at a boundary do
/// not overlap, and two empty ranges at the same instant do not overlap.
///
/// # Examples
///
/// ```
/// use calendar_engine::interval::times_overlap;
/// use chrono::NaiveTime;
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// assert!(!times_overlap(t(9), t(10), t(10), t(11)));
/// assert!(times_overlap(t(9), t(11), t(10), t(12)));
/// ```
pub fn times_overlap(
    start1: NaiveTime,
    end1: NaiveTime,
    start2: NaiveTime,
    end2: NaiveTime,
) -> bool {
    start1 < end2 && start2 < end1
}

// ── Date durations ──────────────────────────────────────────────────────────

/// A non-negative calendar offset. Absent fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateDuration {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
}

impl DateDuration {
    pub fn days(days: u32) -> Self {
        Self { days, ..Self::default() }
    }

    pub fn weeks(weeks: u32) -> Self {
        Self { weeks, ..Self::default() }
    }

    pub fn months(months: u32) -> Self {
        Self { months, ..Self::default() }
    }

    pub fn years(years: u32) -> Self {
        Self { years, ..Self::default() }
    }

    /// Add this duration to `date`.
    ///
    /// Years and months are applied first as whole months, clamping the day
    /// to the end of the resulting month (Jan 31 + 1 month = Feb 28/29).
    /// Weeks and days are then added as days. Returns `None` if the result
    /// is outside chrono's representable range.
    pub fn checked_add_to(&self, date: NaiveDate) -> Option<NaiveDate> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let days = u64::from(self.weeks) * 7 + u64::from(self.days);
        date.checked_add_months(Months::new(months))?
            .checked_add_days(Days::new(days))
    }
}

/// Whether `date2` lies no further than `duration` after `date1`.
///
/// Returns `false` when `date1` is after `date2`; the order is a
/// precondition and is not corrected. The boundary (`date1 + duration ==
/// date2`) counts as within.
pub fn dates_within_duration(
    date1: NaiveDate,
    date2: NaiveDate,
    duration: &DateDuration,
) -> bool {
    if date1 > date2 {
        return false;
    }

    match duration.checked_add_to(date1) {
        Some(limit) => limit >= date2,
        // Past the end of the representable range, so past date2 too.
        None => true,
    }
}

// ── Week spans ──────────────────────────────────────────────────────────────

/// Whole weeks from `date1` to `date2`, measured between civil midnights in
/// `tz` and floored (so negative spans round toward negative infinity).
pub fn weeks_between_in(date1: NaiveDate, date2: NaiveDate, tz: &Tz) -> i64 {
    let start = civil_midnight(date1, tz).timestamp_millis();
    let end = civil_midnight(date2, tz).timestamp_millis();
    (end - start).div_euclid(MS_PER_WEEK)
}

/// Whole weeks from `date1` to `date2` in the default reference zone
/// (Europe/London).
///
/// A span crossing the spring DST change is one hour short, so seven civil
/// days across it count as zero whole weeks.
pub fn weeks_between(date1: NaiveDate, date2: NaiveDate) -> i64 {
    weeks_between_in(date1, date2, &chrono_tz::Europe::London)
}

/// Whole weeks from `date1` to `date2` in the configured reference zone.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] if the configured reference
/// zone is not a valid IANA name.
pub fn weeks_between_with_options(
    date1: NaiveDate,
    date2: NaiveDate,
    options: &CalendarOptions,
) -> Result<i64, CalendarError> {
    let tz = parse_timezone(&options.reference_timezone)?;
    Ok(weeks_between_in(date1, date2, &tz))
}
