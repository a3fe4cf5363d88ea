//! Plain component records for dates and times held in serialized state.
//!
//! A snapshot is whatever a client sent back; it is only trusted after
//! conversion into a chrono value.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSnapshot {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateSnapshot {
    /// Rebuild a validated date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDatetime`] if the components do not
    /// name a real Gregorian date.
    pub fn to_date(self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            CalendarError::InvalidDatetime(format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                self.year, self.month, self.day
            ))
        })
    }
}

impl From<NaiveDate> for DateSnapshot {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(default)]
    pub millisecond: u32,
}

impl TimeSnapshot {
    /// Rebuild a validated time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDatetime`] if any component is out of range.
    pub fn to_time(self) -> Result<NaiveTime, CalendarError> {
        if self.millisecond > 999 {
            return Err(self.invalid());
        }
        NaiveTime::from_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
            .ok_or_else(|| self.invalid())
    }

    fn invalid(self) -> CalendarError {
        CalendarError::InvalidDatetime(format!(
            "{:02}:{:02}:{:02}.{:03} is not a time of day",
            self.hour, self.minute, self.second, self.millisecond
        ))
    }
}

impl From<NaiveTime> for TimeSnapshot {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            millisecond: (time.nanosecond() / 1_000_000).min(999),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_snapshot_from_json() {
        let snap: DateSnapshot =
            serde_json::from_str(r#"{"year": 2024, "month": 2, "day": 29}"#).unwrap();
        assert_eq!(snap.to_date().unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_date_snapshot_rejects_invalid_date() {
        let snap = DateSnapshot { year: 2023, month: 2, day: 29 };
        let err = snap.to_date().unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidDatetime("2023-02-29 is not a calendar date".to_string())
        );
        assert!(DateSnapshot { year: 2023, month: 13, day: 1 }.to_date().is_err());
        assert!(DateSnapshot { year: 2023, month: 1, day: 0 }.to_date().is_err());
    }

    #[test]
    fn test_date_snapshot_from_date() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
        let snap = DateSnapshot::from(date);
        assert_eq!(snap, DateSnapshot { year: 2023, month: 10, day: 5 });
        assert_eq!(snap.to_date().unwrap(), date);
    }

    #[test]
    fn test_time_snapshot_defaults_seconds() {
        let snap: TimeSnapshot = serde_json::from_str(r#"{"hour": 9, "minute": 30}"#).unwrap();
        assert_eq!(snap.to_time().unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn test_time_snapshot_keeps_milliseconds() {
        let snap = TimeSnapshot { hour: 15, minute: 45, second: 30, millisecond: 500 };
        let time = snap.to_time().unwrap();
        assert_eq!(time, NaiveTime::from_hms_milli_opt(15, 45, 30, 500).unwrap());
        assert_eq!(TimeSnapshot::from(time), snap);
    }

    #[test]
    fn test_time_snapshot_rejects_out_of_range() {
        assert!(TimeSnapshot { hour: 24, minute: 0, second: 0, millisecond: 0 }.to_time().is_err());
        assert!(TimeSnapshot { hour: 12, minute: 60, second: 0, millisecond: 0 }.to_time().is_err());
        assert!(TimeSnapshot { hour: 12, minute: 0, second: 0, millisecond: 1000 }.to_time().is_err());
    }
}
