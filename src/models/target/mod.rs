// Target date model
// The fixed calendar moment the countdown counts down to.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use thiserror::Error;

/// Target date literal baked into the page. Format: full month name,
/// day of month, year.
pub const DEFAULT_TARGET_DATE: &str = "December 20, 2024";

const TARGET_DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Error)]
pub enum TargetDateError {
    #[error("unrecognized target date {value:?} (expected e.g. \"December 20, 2024\")")]
    Unparseable {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("midnight on {0} does not exist in the local timezone")]
    InvalidLocalTime(NaiveDate),
}

/// A fixed point in time, parsed once at startup and immutable afterwards.
///
/// A malformed date literal is a startup failure, not a silent bad value:
/// callers get a [`TargetDateError`] instead of an undefined instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInstant(DateTime<Local>);

impl TargetInstant {
    /// Parse a date string such as `"December 20, 2024"` and anchor it at
    /// local midnight.
    pub fn parse(value: &str) -> Result<Self, TargetDateError> {
        let date = NaiveDate::parse_from_str(value.trim(), TARGET_DATE_FORMAT).map_err(
            |source| TargetDateError::Unparseable {
                value: value.to_string(),
                source,
            },
        )?;

        // Midnight can be skipped by a DST transition in some timezones.
        let instant = date
            .and_time(NaiveTime::MIN)
            .and_local_timezone(Local)
            .earliest()
            .ok_or(TargetDateError::InvalidLocalTime(date))?;

        Ok(Self(instant))
    }

    /// Wrap an already-resolved instant. Used by tests and by callers that
    /// build the target from something other than the page literal.
    pub fn from_instant(instant: DateTime<Local>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<Local> {
        self.0
    }
}

impl FromStr for TargetInstant {
    type Err = TargetDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Timelike};

    use super::{TargetDateError, TargetInstant, DEFAULT_TARGET_DATE};

    #[test]
    fn parses_default_target_date() {
        let target = TargetInstant::parse(DEFAULT_TARGET_DATE).unwrap();
        let instant = target.instant();
        assert_eq!(
            instant.date_naive(),
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
        );
        assert_eq!(instant.hour(), 0);
        assert_eq!(instant.minute(), 0);
        assert_eq!(instant.second(), 0);
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        let target = TargetInstant::parse("  December 20, 2024 ").unwrap();
        assert_eq!(target.instant().day(), 20);
    }

    #[test]
    fn rejects_garbage() {
        let err = TargetInstant::parse("not a date").unwrap_err();
        assert!(matches!(err, TargetDateError::Unparseable { .. }));
    }

    #[test]
    fn rejects_numeric_format() {
        // The page literal uses the long month-name form; ISO dates are not
        // accepted.
        assert!(TargetInstant::parse("2024-12-20").is_err());
    }

    #[test]
    fn rejects_nonexistent_day() {
        assert!(TargetInstant::parse("February 30, 2024").is_err());
    }

    #[test]
    fn from_str_round_trips_through_parse() {
        let parsed: TargetInstant = DEFAULT_TARGET_DATE.parse().unwrap();
        assert_eq!(parsed, TargetInstant::parse(DEFAULT_TARGET_DATE).unwrap());
    }
}
