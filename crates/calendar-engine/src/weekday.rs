//! Day-of-week resolution.
//!
//! Every day-of-week computation in this crate goes through a fixed
//! ISO-style index: Monday = 0 through Sunday = 6. The index is a table
//! position in [`Day::ALL`], independent of any locale's week start.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A named day of the week, serialized by its English name (`"Monday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in index order, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The fixed index of this day (Monday = 0, Sunday = 6).
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Look up a day by its fixed index. Returns `None` outside 0..=6.
    pub fn from_index(index: u32) -> Option<Day> {
        Self::ALL.get(index as usize).copied()
    }

    /// The canonical English name.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = CalendarError;

    /// Parse one of the seven canonical names, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                tracing::debug!(token = %s, "rejected weekday token");
                CalendarError::InvalidWeekday(format!("'{}'", s))
            })
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

/// The fixed weekday index of `date` (Monday = 0, Sunday = 6).
///
/// # Examples
///
/// ```
/// use calendar_engine::weekday::weekday_index;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(weekday_index(date), 3); // Thursday
/// ```
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// The named day of the week `date` falls on.
pub fn weekday_of(date: NaiveDate) -> Day {
    Day::from(date.weekday())
}

/// Whether `date` falls on `day`.
pub fn is_weekday(date: NaiveDate, day: Day) -> bool {
    weekday_of(date) == day
}
