//! Whole-year age computation from a date of birth.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::clock::today_at;
use crate::error::CalendarError;

/// Whole years elapsed between `dob` and `today`.
///
/// The birthday counts as having occurred on the day itself. A Feb 29
/// birthday is compared by (month, day) like any other, so in a non-leap
/// year it is reached on Mar 1.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidInput`] if `dob` is after `today`.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Result<i32, CalendarError> {
    if today < dob {
        tracing::debug!(%dob, %today, "date of birth is in the future");
        return Err(CalendarError::InvalidInput(format!(
            "date of birth {} is in the future",
            dob
        )));
    }

    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    Ok(years)
}

/// Age in whole years as of the civil date of `anchor` in `timezone`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] for an unknown zone, or
/// [`CalendarError::InvalidInput`] if `dob` is in the future.
pub fn age_from_dob_at(
    dob: NaiveDate,
    timezone: &str,
    anchor: DateTime<Utc>,
) -> Result<i32, CalendarError> {
    age_on(dob, today_at(timezone, anchor)?)
}

/// Age in whole years as of today in `timezone`, using the system clock.
///
/// # Errors
///
/// See [`age_from_dob_at`].
pub fn age_from_dob(dob: NaiveDate, timezone: &str) -> Result<i32, CalendarError> {
    age_from_dob_at(dob, timezone, Utc::now())
}
