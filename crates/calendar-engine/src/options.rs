//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::clock::parse_timezone;
use crate::error::CalendarError;
use crate::format::Locale;

/// Default reference zone for civil-midnight instants.
pub const DEFAULT_TIME_ZONE: &str = "Europe/London";

/// Options for the `*_with_options` entry points and [`crate::DateFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// IANA zone whose civil midnights anchor week-span computations.
    pub reference_timezone: String,
    /// Locale for date rendering.
    pub locale: Locale,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            reference_timezone: DEFAULT_TIME_ZONE.to_string(),
            locale: Locale::default(),
        }
    }
}

impl CalendarOptions {
    /// Load options from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidConfig`] if the document does not
    /// parse, or [`CalendarError::InvalidTimezone`] if the reference zone is
    /// not a valid IANA name.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let options: CalendarOptions = serde_json::from_str(json).map_err(|e| {
            tracing::debug!(error = %e, "rejected calendar options");
            CalendarError::InvalidConfig(e.to_string())
        })?;
        parse_timezone(&options.reference_timezone)?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CalendarOptions::default();
        assert_eq!(options.reference_timezone, "Europe/London");
        assert_eq!(options.locale, Locale::EnGb);
    }

    #[test]
    fn test_from_json_full() {
        let options =
            CalendarOptions::from_json(r#"{"reference_timezone": "UTC", "locale": "en-US"}"#)
                .unwrap();
        assert_eq!(options.reference_timezone, "UTC");
        assert_eq!(options.locale, Locale::EnUs);
    }

    #[test]
    fn test_from_json_missing_fields_default() {
        assert_eq!(CalendarOptions::from_json("{}").unwrap(), CalendarOptions::default());
        let options = CalendarOptions::from_json(r#"{"locale": "en-US"}"#).unwrap();
        assert_eq!(options.reference_timezone, DEFAULT_TIME_ZONE);
    }

    #[test]
    fn test_from_json_rejects_bad_document() {
        assert!(matches!(
            CalendarOptions::from_json(r#"{"locale": "fr-FR"}"#),
            Err(CalendarError::InvalidConfig(_))
        ));
        assert!(matches!(
            CalendarOptions::from_json("not json"),
            Err(CalendarError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_zone() {
        assert!(matches!(
            CalendarOptions::from_json(r#"{"reference_timezone": "Moon/Base"}"#),
            Err(CalendarError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn test_round_trips_through_json() {
        let options = CalendarOptions {
            reference_timezone: "Asia/Tokyo".to_string(),
            locale: Locale::EnUs,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(CalendarOptions::from_json(&json).unwrap(), options);
    }
}
