//! Fixed-locale string rendering for days, dates, and times.
//!
//! Rendering is table driven: no host locale or timezone state is consulted.
//! The free functions render in en-GB; use a [`DateFormatter`] for en-US.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::options::CalendarOptions;
use crate::weekday::Day;

/// Locales with a month-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// British English: day before month, "Sept".
    #[default]
    #[serde(rename = "en-GB")]
    EnGb,
    /// US English: month before day.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnGb => "en-GB",
            Locale::EnUs => "en-US",
        }
    }

    fn month_short(self, month: u32) -> &'static str {
        match (self, month) {
            (Locale::EnGb, 9) => "Sept",
            (_, m) => MONTHS_SHORT[(m as usize - 1) % 12],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-gb" => Ok(Locale::EnGb),
            "en-us" => Ok(Locale::EnUs),
            _ => Err(CalendarError::InvalidConfig(format!("unsupported locale '{}'", s))),
        }
    }
}

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ── Days of the week ────────────────────────────────────────────────────────

/// Three-letter day name: `Monday` → `"Mon"`.
pub fn format_day_short(day: Day) -> &'static str {
    &day.name()[..3]
}

/// Single-letter day name: `Monday` → `"M"`.
pub fn format_day_letter(day: Day) -> &'static str {
    &day.name()[..1]
}

// ── Calendar dates ──────────────────────────────────────────────────────────

/// Locale-bound date renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFormatter {
    locale: Locale,
}

impl DateFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn from_options(options: &CalendarOptions) -> Self {
        Self::new(options.locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Day and short month: `"5 Oct"` (en-GB), `"Oct 5"` (en-US).
    pub fn date_short(&self, date: NaiveDate) -> String {
        let month = self.locale.month_short(date.month());
        match self.locale {
            Locale::EnGb => format!("{} {}", date.day(), month),
            Locale::EnUs => format!("{} {}", month, date.day()),
        }
    }

    /// Day, short month and year: `"5 Oct 2023"` (en-GB), `"Oct 5, 2023"` (en-US).
    pub fn date_full(&self, date: NaiveDate) -> String {
        let month = self.locale.month_short(date.month());
        match self.locale {
            Locale::EnGb => format!("{} {} {}", date.day(), month, date.year()),
            Locale::EnUs => format!("{} {}, {}", month, date.day(), date.year()),
        }
    }

    /// Two-digit day and month with a full year: `"05/10/2023"` (en-GB),
    /// `"10/05/2023"` (en-US).
    pub fn date_num(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::EnGb => format!("{:02}/{:02}/{}", date.day(), date.month(), date.year()),
            Locale::EnUs => format!("{:02}/{:02}/{}", date.month(), date.day(), date.year()),
        }
    }

    /// Short month and two-digit year: `"Oct 23"`.
    pub fn month(&self, date: NaiveDate) -> String {
        format!(
            "{} {:02}",
            self.locale.month_short(date.month()),
            date.year().rem_euclid(100)
        )
    }

    /// Numeric date and `HH:MM:SS` of the value's own wall clock.
    pub fn absolute<T: TimeZone>(&self, datetime: &DateTime<T>) -> String {
        let local = datetime.naive_local();
        format!("{} {}", self.date_num(local.date()), format_time_full(local.time()))
    }
}

/// `"5 Oct"`
pub fn format_date_short(date: NaiveDate) -> String {
    DateFormatter::default().date_short(date)
}

/// `"5 Oct 2023"`
pub fn format_date_full(date: NaiveDate) -> String {
    DateFormatter::default().date_full(date)
}

/// `"2023-10-05"`
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `"05/10/2023"`
pub fn format_date_num(date: NaiveDate) -> String {
    DateFormatter::default().date_num(date)
}

/// `"Oct 23"`
pub fn format_month(date: NaiveDate) -> String {
    DateFormatter::default().month(date)
}

/// `"05/10/2023 14:30:00"`
pub fn format_absolute<T: TimeZone>(datetime: &DateTime<T>) -> String {
    DateFormatter::default().absolute(datetime)
}

/// Parse a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDatetime`] if `s` is not a valid ISO date.
pub fn parse_date_iso(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| CalendarError::InvalidDatetime(format!("'{}': {}", s, e)))
}

// ── Times ───────────────────────────────────────────────────────────────────

/// `HH:MM`, zero padded.
pub fn format_time_short(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// `HH:MM:SS`, zero padded. Fractional seconds are dropped.
pub fn format_time_full(time: NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// The `HH:MM` end of a slot starting at `start` and lasting
/// `duration_minutes`, wrapping past midnight.
pub fn format_time_end(start: NaiveTime, duration_minutes: u32) -> String {
    let (end, _) = start.overflowing_add_signed(Duration::minutes(i64::from(duration_minutes)));
    format_time_short(end)
}
