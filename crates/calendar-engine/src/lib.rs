//! # calendar-engine
//!
//! Deterministic calendar and time-of-day arithmetic.
//!
//! Dates are `chrono::NaiveDate` (proleptic Gregorian) and times are
//! `chrono::NaiveTime`. Every function is pure over its inputs; those that
//! need "now" come in an `*_at` form taking an explicit anchor instant.
//!
//! ## Modules
//!
//! - [`weekday`] — Monday-indexed day-of-week resolution and the [`Day`] enum
//! - [`clock`] — Civil "today" in a named time zone
//! - [`age`] — Whole-year age from a date of birth
//! - [`recurrence`] — Next/last occurrence of a weekday, month windows
//! - [`interval`] — Time-range overlap, duration-bounded date checks, week spans
//! - [`format`] — Fixed-locale rendering of days, dates, and times
//! - [`snapshot`] — Validated rebuild of serialized date/time components
//! - [`options`] — Reference time zone and locale configuration
//! - [`error`] — Error types

pub mod age;
pub mod clock;
pub mod error;
pub mod format;
pub mod interval;
pub mod options;
pub mod recurrence;
pub mod snapshot;
pub mod weekday;

pub use age::{age_from_dob, age_from_dob_at, age_on};
pub use clock::{is_today, is_today_at, today_at};
pub use error::CalendarError;
pub use format::{
    format_absolute, format_date_full, format_date_iso, format_date_num, format_date_short,
    format_day_letter, format_day_short, format_month, format_time_end, format_time_full,
    format_time_short, parse_date_iso, DateFormatter, Locale,
};
pub use interval::{
    dates_within_duration, times_overlap, weeks_between, weeks_between_in,
    weeks_between_with_options, DateDuration,
};
pub use options::{CalendarOptions, DEFAULT_TIME_ZONE};
pub use recurrence::{
    last_month_starts, last_occurrence, last_occurrences, next_occurrence, start_of_month,
};
pub use snapshot::{DateSnapshot, TimeSnapshot};
pub use weekday::{is_weekday, weekday_index, weekday_of, Day};
