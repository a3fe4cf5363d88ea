//! Civil "today" resolution in a named time zone.
//!
//! The `*_at` functions take the "now" anchor explicitly so they stay
//! deterministic and testable; the un-suffixed forms read `Utc::now()`.

use chrono::{DateTime, LocalResult, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::CalendarError;

/// Parse an IANA timezone string into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz, CalendarError> {
    s.parse::<Tz>().map_err(|_| {
        tracing::debug!(timezone = %s, "unknown timezone");
        CalendarError::InvalidTimezone(format!("'{}'", s))
    })
}

/// The civil date of `anchor` as observed in `timezone`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] if `timezone` is not a valid IANA name.
pub fn today_at(timezone: &str, anchor: DateTime<Utc>) -> Result<NaiveDate, CalendarError> {
    let tz = parse_timezone(timezone)?;
    Ok(anchor.with_timezone(&tz).date_naive())
}

/// Whether `date` is the current calendar day in `timezone` at instant `anchor`.
///
/// This is calendar-day equality: it holds for every instant from local
/// midnight up to (not including) the following local midnight.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] if `timezone` is not a valid IANA name.
pub fn is_today_at(
    date: NaiveDate,
    timezone: &str,
    anchor: DateTime<Utc>,
) -> Result<bool, CalendarError> {
    Ok(today_at(timezone, anchor)? == date)
}

/// Whether `date` is today in `timezone`, using the system clock.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] if `timezone` is not a valid IANA name.
pub fn is_today(date: NaiveDate, timezone: &str) -> Result<bool, CalendarError> {
    is_today_at(date, timezone, Utc::now())
}

/// The instant of civil midnight starting `date` in `tz`.
///
/// An ambiguous midnight resolves to the earlier instant. A midnight that
/// falls in a DST gap resolves to the first instant after the gap.
pub(crate) fn civil_midnight(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            // Interpret the wall-clock value with the offset in force before the gap.
            let before = tz.offset_from_utc_datetime(&(naive - chrono::Duration::days(1)));
            let offset_secs = i64::from(before.fix().local_minus_utc());
            Utc.from_utc_datetime(&(naive - chrono::Duration::seconds(offset_secs)))
        }
    }
}
